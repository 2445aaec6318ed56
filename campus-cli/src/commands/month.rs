use anyhow::Result;
use campus_core::calendar::{CalendarCursor, Resolver};
use campus_core::schedule::Schedule;

use crate::render::Render;

pub fn run(resolver: &Resolver<Schedule>, year: Option<i32>, month: Option<u32>, json: bool) -> Result<()> {
    let current = resolver.cursor();
    let year = year.unwrap_or(current.year());
    let month = month.unwrap_or(current.month().number_from_month());

    let cursor = CalendarCursor::from_number(year, month)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}. Expected 1-12", month))?;
    let grid = resolver.build_month_grid(cursor);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        println!("{}", grid.render());
    }

    Ok(())
}
