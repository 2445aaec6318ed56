//! The (month, year) pair that decides which month is displayed.

use std::fmt;

use chrono::{Datelike, Days, Month, NaiveDate};
use serde::Serialize;

/// Years the cursor may take. One year of margin on each side of chrono's
/// range keeps the leading and trailing grid days representable.
fn year_bounds() -> (i32, i32) {
    (NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCursor {
    year: i32,
    month: Month,
}

impl CalendarCursor {
    /// Build a cursor. Years outside the representable range saturate at its edges.
    pub fn new(year: i32, month: Month) -> Self {
        let (min, max) = year_bounds();
        CalendarCursor {
            year: year.clamp(min, max),
            month,
        }
    }

    /// Build from a zero-based month index (0 = January … 11 = December).
    pub fn from_index(year: i32, index: u32) -> Option<Self> {
        Self::from_number(year, index.checked_add(1)?)
    }

    /// Build from a one-based month number (1 = January … 12 = December).
    pub fn from_number(year: i32, number: u32) -> Option<Self> {
        let number = u8::try_from(number).ok()?;
        let month = Month::try_from(number).ok()?;
        Some(Self::new(year, month))
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::from_number(date.year(), date.month()).expect("chrono months are 1..=12")
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn previous(self) -> Self {
        if self.month == Month::January {
            if self.year == year_bounds().0 {
                return self;
            }
            return Self::new(self.year - 1, Month::December);
        }
        Self::new(self.year, self.month.pred())
    }

    pub fn next(self) -> Self {
        if self.month == Month::December {
            if self.year == year_bounds().1 {
                return self;
            }
            return Self::new(self.year + 1, Month::January);
        }
        Self::new(self.year, self.month.succ())
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .expect("cursor year is clamped to chrono's range")
    }

    /// The Sunday on or before the first day of the month.
    pub fn grid_start(&self) -> NaiveDate {
        let first = self.first_day();
        let offset = first.weekday().num_days_from_sunday();
        first
            .checked_sub_days(Days::new(u64::from(offset)))
            .expect("cursor year is clamped to chrono's range")
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}
