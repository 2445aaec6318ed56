use anyhow::Result;
use campus_core::calendar::{Navigation, Resolver};
use campus_core::schedule::Schedule;
use dialoguer::Select;

use crate::render::Render;

const CHOICES: [(&str, Option<Navigation>); 4] = [
    ("Previous month", Some(Navigation::Previous)),
    ("Next month", Some(Navigation::Next)),
    ("Today", Some(Navigation::Today)),
    ("Quit", None),
];

pub fn run(mut resolver: Resolver<Schedule>) -> Result<()> {
    let items: Vec<&str> = CHOICES.iter().map(|(label, _)| *label).collect();
    let mut grid = resolver.current_grid();
    let mut selection = 1;

    loop {
        println!("{}\n", grid.render());

        selection = Select::new()
            .with_prompt("  Navigate")
            .items(&items)
            .default(selection)
            .interact()?;

        let Some(navigation) = CHOICES[selection].1 else {
            return Ok(());
        };

        grid = resolver.navigate(navigation);
        println!();
    }
}
