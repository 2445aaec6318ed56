use anyhow::{Context, Result};
use campus_core::calendar::Resolver;
use campus_core::schedule::Schedule;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(resolver: &Resolver<Schedule>, date: Option<&str>, json: bool) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(s)?,
        None => resolver.today(),
    };

    let events = resolver.resolve_events_for_date(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{}", date.format("%A %-d %B %Y").bold());

    if events.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2024-12-25").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
        );
        assert_eq!(
            parse_date(" 2025-01-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("25/12/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
