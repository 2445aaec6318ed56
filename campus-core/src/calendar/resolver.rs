//! Calendar resolver and grid builder.
//!
//! A `Resolver` owns the displayed month and answers "what happens on this
//! date" from its entry source. Dated entries come first, then the weekday's
//! recurring entries, each in declaration order. Recurring entries are never
//! suppressed by a dated entry on the same day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, LocalClock};
use super::cursor::CalendarCursor;
use super::grid::{DayCell, GRID_CELLS, MonthGrid};
use crate::event::ResolvedEvent;
use crate::source::EntrySource;

/// Cursor movement requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Previous,
    Next,
    Today,
}

pub struct Resolver<S, C = LocalClock> {
    source: S,
    clock: C,
    cursor: CalendarCursor,
}

impl<S: EntrySource> Resolver<S> {
    /// Resolver on the local clock, showing the current month.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, LocalClock)
    }
}

impl<S: EntrySource, C: Clock> Resolver<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        let cursor = CalendarCursor::containing(clock.today());
        Resolver {
            source,
            clock,
            cursor,
        }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    /// The current date according to this resolver's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Events visible on `date`: dated entries, then recurring entries.
    pub fn resolve_events_for_date(&self, date: NaiveDate) -> Vec<ResolvedEvent> {
        let dated = self.source.dated_on(date).into_iter().map(ResolvedEvent::from);
        let recurring = self
            .source
            .recurring_on(date.weekday())
            .into_iter()
            .map(ResolvedEvent::from);

        dated.chain(recurring).collect()
    }

    /// Lay out the month under `cursor` as 42 days starting on a Sunday.
    pub fn build_month_grid(&self, cursor: CalendarCursor) -> MonthGrid {
        let today = self.today();
        let month = cursor.month().number_from_month();

        let cells: Vec<DayCell> = cursor
            .grid_start()
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| DayCell {
                date,
                is_other_month: date.month() != month,
                is_today: date == today,
                events: self.resolve_events_for_date(date),
            })
            .collect();

        tracing::trace!(%cursor, cells = cells.len(), "built month grid");

        MonthGrid { cursor, cells }
    }

    /// Grid for the month the cursor currently points at.
    pub fn current_grid(&self) -> MonthGrid {
        self.build_month_grid(self.cursor)
    }

    /// Move the cursor and rebuild the grid.
    pub fn navigate(&mut self, navigation: Navigation) -> MonthGrid {
        self.cursor = match navigation {
            Navigation::Previous => self.cursor.previous(),
            Navigation::Next => self.cursor.next(),
            Navigation::Today => CalendarCursor::containing(self.today()),
        };

        tracing::debug!(?navigation, cursor = %self.cursor, "navigated calendar");

        self.current_grid()
    }
}
