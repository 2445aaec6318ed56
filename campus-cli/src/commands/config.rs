use anyhow::Result;
use campus_core::config::CampusConfig;
use campus_core::schedule::BUILTIN_SCHEDULES;
use owo_colors::OwoColorize;

pub fn run(config: &CampusConfig) -> Result<()> {
    let config_path = CampusConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Users:      {}", config.users_path().display());

    println!();
    println!("{}", "Schedules".bold());
    for name in BUILTIN_SCHEDULES {
        let source = match config.schedule_path(name) {
            Some(path) => path.display().to_string(),
            None => "(built-in)".dimmed().to_string(),
        };
        println!("  {:<11} {}", format!("{}:", name), source);
    }
    for (name, path) in &config.schedules {
        if BUILTIN_SCHEDULES.contains(&name.as_str()) {
            continue;
        }
        println!("  {:<11} {}", format!("{}:", name), path.display());
    }
    println!("  Default:    {}", config.default_schedule);

    Ok(())
}
