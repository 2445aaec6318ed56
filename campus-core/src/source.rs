//! Entry source abstraction.
//!
//! The resolver only needs two questions answered about its data: which dated
//! entries fall on a date, and which recurring entries fire on a weekday.
//! Anything that can answer both can back a calendar.

use chrono::{NaiveDate, Weekday};

use crate::entry::{DatedEntry, RecurringEntry};

pub trait EntrySource {
    /// Dated entries on exactly this calendar date, in declaration order.
    fn dated_on(&self, date: NaiveDate) -> Vec<&DatedEntry>;

    /// Recurring entries that fire on this weekday, in declaration order.
    fn recurring_on(&self, weekday: Weekday) -> Vec<&RecurringEntry>;
}
