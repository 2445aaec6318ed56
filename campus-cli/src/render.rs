//! TUI rendering traits for campus types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to campus-core types using owo_colors.

use campus_core::calendar::{DAYS_PER_WEEK, DayCell, MonthGrid};
use campus_core::event::{EventCategory, ResolvedEvent};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Width of one day column, excluding the separator
const CELL_WIDTH: usize = 15;

/// Events shown per day before collapsing the rest into a count
const COMPACT_THRESHOLD: usize = 3;

const WEEKDAY_HEADER: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Colorize text according to the event category
fn colorize(category: EventCategory, text: &str) -> String {
    match category {
        EventCategory::Holiday => text.red().to_string(),
        EventCategory::Academic => text.magenta().to_string(),
        EventCategory::Assignment => text.yellow().to_string(),
        EventCategory::Meeting => text.cyan().to_string(),
        EventCategory::Course => text.green().to_string(),
        EventCategory::Topic => text.blue().to_string(),
    }
}

impl Render for ResolvedEvent {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            colorize(self.category(), "●"),
            self.title,
            self.detail().dimmed()
        )
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = self.cursor.to_string();
        let total_width = DAYS_PER_WEEK * (CELL_WIDTH + 1) - 1;
        lines.push(format!("{:^width$}", title, width = total_width).bold().to_string());

        let header: Vec<String> = WEEKDAY_HEADER
            .iter()
            .map(|d| format!("{:<CELL_WIDTH$}", d).dimmed().to_string())
            .collect();
        lines.push(header.join(" "));

        for week in self.weeks() {
            lines.push(separator());
            lines.push(render_row(week, day_number));

            let rows = week.iter().map(visible_lines).max().unwrap_or(0);
            for i in 0..rows {
                lines.push(render_row(week, |cell| event_line(cell, i)));
            }
        }
        lines.push(separator());

        lines.join("\n")
    }
}

fn separator() -> String {
    let column = "─".repeat(CELL_WIDTH);
    vec![column; DAYS_PER_WEEK].join("┼").dimmed().to_string()
}

fn render_row<F>(week: &[DayCell], cell_text: F) -> String
where
    F: Fn(&DayCell) -> String,
{
    let divider = "│".dimmed().to_string();
    week.iter().map(cell_text).collect::<Vec<_>>().join(divider.as_str())
}

fn day_number(cell: &DayCell) -> String {
    let text = format!("{:<CELL_WIDTH$}", cell.date.format("%-d").to_string());
    if cell.is_today {
        text.bold().reversed().to_string()
    } else if cell.is_other_month {
        text.dimmed().to_string()
    } else {
        text.bold().to_string()
    }
}

/// Number of lines a cell needs under its day number
fn visible_lines(cell: &DayCell) -> usize {
    if cell.events.len() > COMPACT_THRESHOLD {
        COMPACT_THRESHOLD + 1
    } else {
        cell.events.len()
    }
}

/// The i-th line under a cell's day number, padded to the column width
fn event_line(cell: &DayCell, i: usize) -> String {
    let blank = " ".repeat(CELL_WIDTH);

    let collapse = cell.events.len() > COMPACT_THRESHOLD;
    if collapse && i == COMPACT_THRESHOLD {
        let hidden = cell.events.len() - COMPACT_THRESHOLD;
        let label = fit(&format!("+{} more", hidden), CELL_WIDTH);
        return format!("{:<CELL_WIDTH$}", label).dimmed().to_string();
    }

    let Some(event) = cell.events.get(i) else {
        return blank;
    };
    let text = format!("{:<CELL_WIDTH$}", fit(&event.title, CELL_WIDTH));

    if cell.is_other_month {
        text.dimmed().to_string()
    } else {
        colorize(event.category(), &text)
    }
}

/// Truncate to at most `width` characters, marking the cut with an ellipsis
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
