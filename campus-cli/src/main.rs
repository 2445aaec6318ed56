mod commands;
mod render;

use anyhow::Result;
use campus_core::calendar::Resolver;
use campus_core::config::CampusConfig;
use campus_core::error::CampusError;
use campus_core::schedule::{self, Schedule};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Browse the campus calendar and manage portal users")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month as a six-week grid
    Month {
        /// Schedule to show (e.g. "courses", "meetings")
        #[arg(short, long)]
        schedule: Option<String>,

        /// Year to show (defaults to the current year)
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events on one day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,

        /// Schedule to read (e.g. "courses", "meetings")
        #[arg(short, long)]
        schedule: Option<String>,

        /// Print the events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Step through months interactively
    Browse {
        /// Schedule to browse (e.g. "courses", "meetings")
        #[arg(short, long)]
        schedule: Option<String>,
    },
    /// Check a login against the users file
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Manage the users file
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Show configuration paths
    Config,
}

#[derive(Subcommand)]
enum UsersAction {
    /// List registered users
    List,
    /// Register a new user
    Add {
        email: String,

        /// Password (prompted for if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Remove a user
    Remove { email: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CampusConfig::load()?;

    match cli.command {
        Commands::Month {
            schedule,
            year,
            month,
            json,
        } => {
            let resolver = open_resolver(&config, schedule.as_deref())?;
            commands::month::run(&resolver, year, month, json)
        }
        Commands::Day {
            date,
            schedule,
            json,
        } => {
            let resolver = open_resolver(&config, schedule.as_deref())?;
            commands::day::run(&resolver, date.as_deref(), json)
        }
        Commands::Browse { schedule } => {
            let resolver = open_resolver(&config, schedule.as_deref())?;
            commands::browse::run(resolver)
        }
        Commands::Login { email } => commands::login::run(&config, email),
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list(&config),
            UsersAction::Add { email, password } => commands::users::add(&config, &email, password),
            UsersAction::Remove { email } => commands::users::remove(&config, &email),
        },
        Commands::Config => commands::config::run(&config),
    }
}

/// Build a resolver over the named schedule, or the configured default.
fn open_resolver(config: &CampusConfig, name: Option<&str>) -> Result<Resolver<Schedule>> {
    let name = name.unwrap_or(&config.default_schedule);

    let schedule = match schedule::load_schedule(config, name) {
        Err(CampusError::ScheduleNotFound(_)) => {
            let mut available: Vec<String> = schedule::BUILTIN_SCHEDULES
                .iter()
                .map(|s| s.to_string())
                .chain(config.schedules.keys().cloned())
                .collect();
            available.sort();
            available.dedup();
            anyhow::bail!(
                "Schedule '{}' not found. Available: {}",
                name,
                available.join(", ")
            );
        }
        result => result?,
    };

    tracing::debug!(
        schedule = name,
        recurring = schedule.recurring.len(),
        dated = schedule.dated.len(),
        "opened schedule"
    );

    Ok(Resolver::new(schedule))
}
