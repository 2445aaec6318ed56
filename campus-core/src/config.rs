//! Global campus configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, CampusResult};

static DEFAULT_USERS_FILE: &str = "~/.config/campus/users.txt";
static DEFAULT_SCHEDULE: &str = "courses";
static ENV_PREFIX: &str = "CAMPUS";

/// Port the HTTP server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3000;

fn default_users_file() -> PathBuf {
    PathBuf::from(DEFAULT_USERS_FILE)
}

fn default_schedule() -> String {
    DEFAULT_SCHEDULE.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Global configuration at ~/.config/campus/config.toml
///
/// Every key can also be set through a `CAMPUS_` prefixed environment
/// variable, e.g. `CAMPUS_PORT=8080`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CampusConfig {
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,

    #[serde(default = "default_schedule")]
    pub default_schedule: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Schedule name -> TOML file replacing (or adding to) the built-in schedules
    #[serde(default)]
    pub schedules: BTreeMap<String, PathBuf>,
}

impl Default for CampusConfig {
    fn default() -> Self {
        CampusConfig {
            users_file: default_users_file(),
            default_schedule: default_schedule(),
            port: default_port(),
            schedules: BTreeMap::new(),
        }
    }
}

impl CampusConfig {
    pub fn config_path() -> CampusResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CampusError::Config("Could not determine config directory".into()))?
            .join("campus");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/campus/config.toml, creating a commented default on first run.
    pub fn load() -> CampusResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, layered with `CAMPUS_*` environment variables.
    pub fn load_from(path: &Path) -> CampusResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(path: &Path, env: Environment) -> CampusResult<Self> {
        let config: CampusConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| CampusError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CampusError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded campus config");

        Ok(config)
    }

    /// Users file with `~` expanded.
    pub fn users_path(&self) -> PathBuf {
        expand(&self.users_file)
    }

    /// Override file for a named schedule, with `~` expanded.
    pub fn schedule_path(&self, name: &str) -> Option<PathBuf> {
        self.schedules.get(name).map(|p| expand(p))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CampusResult<()> {
        let contents = format!(
            "\
# campus configuration

# Flat file of `email,password` lines used for login:
# users_file = \"{}\"

# Schedule shown when none is given:
# default_schedule = \"{}\"

# HTTP server port:
# port = {}

# Replace a built-in schedule (or add a new one) from a TOML file:
# [schedules]
# courses = \"~/campus/courses.toml\"
",
            DEFAULT_USERS_FILE, DEFAULT_SCHEDULE, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CampusError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CampusError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
