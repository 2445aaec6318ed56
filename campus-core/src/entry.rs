//! Static schedule entries.
//!
//! Two kinds of entries feed the calendar: recurring entries that fire every
//! week on a fixed weekday, and dated entries anchored to a single calendar
//! date. Both are immutable once a schedule is loaded.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// A start/end time pair, written as `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeSlot { start, end }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| CampusError::Schedule(format!("Invalid time slot '{}'. Expected HH:MM-HH:MM", s)))?;

        let parse = |part: &str| {
            NaiveTime::parse_from_str(part.trim(), "%H:%M")
                .map_err(|_| CampusError::Schedule(format!("Invalid time '{}' in slot '{}'", part.trim(), s)))
        };

        Ok(TimeSlot {
            start: parse(start)?,
            end: parse(end)?,
        })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = CampusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// What kind of weekly occupancy a recurring entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringCategory {
    /// Course lecture
    Lecture,
    /// Course lab session
    Lab,
    /// Recurring meeting topic
    Topic,
}

/// A weekly-repeating entry keyed by weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringEntry {
    pub weekday: Weekday,
    #[serde(rename = "time")]
    pub slot: TimeSlot,
    pub label: String,
    pub location: String,
    pub facilitator: String,
    pub category: RecurringCategory,
}

/// Category of a dated entry, with the payload each category carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum DatedCategory {
    Holiday,
    Academic,
    Assignment { course: String },
    Meeting { topic: String },
}

/// A one-off entry anchored to an absolute calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedEntry {
    pub date: NaiveDate,
    pub title: String,
    #[serde(flatten)]
    pub category: DatedCategory,
}

impl DatedEntry {
    /// Human-readable detail line shown next to the title.
    pub fn detail(&self) -> String {
        match &self.category {
            // Academic markers live alongside holidays and share their label
            DatedCategory::Holiday | DatedCategory::Academic => "Holiday".to_string(),
            DatedCategory::Assignment { course } => course.clone(),
            DatedCategory::Meeting { topic } => topic.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_time_slot() {
        let slot: TimeSlot = "09:00-10:30".parse().unwrap();
        assert_eq!(slot, TimeSlot::new(time(9, 0), time(10, 30)));
        assert_eq!(slot.to_string(), "09:00-10:30");
    }

    #[test]
    fn parses_time_slot_with_spaces() {
        let slot: TimeSlot = " 14:00 - 15:30".parse().unwrap();
        assert_eq!(slot, TimeSlot::new(time(14, 0), time(15, 30)));
    }

    #[test]
    fn rejects_malformed_time_slot() {
        assert!("09:00".parse::<TimeSlot>().is_err());
        assert!("9am-10am".parse::<TimeSlot>().is_err());
        assert!("25:00-26:00".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn dated_entry_from_toml() {
        let entry: DatedEntry = toml::from_str(
            r#"
            date = "2024-12-15"
            title = "Math Assignment #3"
            category = "assignment"
            course = "MATH101"
            "#,
        )
        .unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(
            entry.category,
            DatedCategory::Assignment {
                course: "MATH101".into()
            }
        );
        assert_eq!(entry.detail(), "MATH101");
    }

    #[test]
    fn holiday_and_academic_share_detail() {
        let holiday: DatedEntry = toml::from_str(
            r#"
            date = "2024-12-25"
            title = "Christmas Day"
            category = "holiday"
            "#,
        )
        .unwrap();
        let academic: DatedEntry = toml::from_str(
            r#"
            date = "2025-01-15"
            title = "Spring Semester Begins"
            category = "academic"
            "#,
        )
        .unwrap();

        assert_eq!(holiday.detail(), "Holiday");
        assert_eq!(academic.detail(), "Holiday");
    }

    #[test]
    fn recurring_entry_from_toml() {
        let entry: RecurringEntry = toml::from_str(
            r#"
            weekday = "Monday"
            time = "16:00-17:30"
            label = "Physics Fundamentals"
            location = "Lab 103"
            facilitator = "Dr. Brown"
            category = "lab"
            "#,
        )
        .unwrap();

        assert_eq!(entry.weekday, Weekday::Mon);
        assert_eq!(entry.slot.to_string(), "16:00-17:30");
        assert_eq!(entry.category, RecurringCategory::Lab);
    }
}
