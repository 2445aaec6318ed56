//! Core types for the campus portal.
//!
//! This crate provides everything the CLI and server share:
//! - `calendar` for month grids, the cursor and event resolution
//! - `schedule` and `entry` for the static recurring and dated entries
//! - `users` for the flat-file login store
//! - `config` for the global configuration file

pub mod calendar;
pub mod config;
pub mod entry;
pub mod error;
pub mod event;
pub mod schedule;
pub mod source;
pub mod users;

pub use calendar::{CalendarCursor, DayCell, MonthGrid, Navigation, Resolver};
pub use error::{CampusError, CampusResult};
pub use event::{EventCategory, EventKind, ResolvedEvent};
pub use schedule::Schedule;
pub use source::EntrySource;
