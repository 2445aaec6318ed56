//! The 6-week month grid handed to renderers.

use chrono::NaiveDate;
use serde::Serialize;

use super::cursor::CalendarCursor;
use crate::event::ResolvedEvent;

pub const DAYS_PER_WEEK: usize = 7;

/// Cells in every grid: 6 rows of 7 days.
pub const GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// One day of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Leading or trailing day borrowed from an adjacent month
    pub is_other_month: bool,
    pub is_today: bool,
    pub events: Vec<ResolvedEvent>,
}

/// A month laid out as 42 consecutive days starting on a Sunday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub cursor: CalendarCursor,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.is_today)
    }

    /// Cells belonging to the displayed month.
    pub fn days_in_month(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| !c.is_other_month)
    }
}
