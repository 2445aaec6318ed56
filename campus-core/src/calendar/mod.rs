//! Month calendar: cursor, grid and event resolution.

mod clock;
mod cursor;
mod grid;
mod resolver;

pub use clock::{Clock, FixedClock, LocalClock};
pub use cursor::CalendarCursor;
pub use grid::{DAYS_PER_WEEK, DayCell, GRID_CELLS, MonthGrid};
pub use resolver::{Navigation, Resolver};
