use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use campus_core::calendar::Resolver;
use campus_core::config::CampusConfig;
use campus_core::error::CampusError;
use campus_core::schedule::{self, Schedule};
use campus_core::users::UserStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    users: UserStore,
    // One cursor per schedule; the lock serializes navigate + rebuild
    calendars: Arc<BTreeMap<String, Mutex<Resolver<Schedule>>>>,
}

impl AppState {
    pub fn from_config(config: &CampusConfig) -> Result<Self> {
        let schedules = schedule::load_schedules(config)?;
        tracing::info!(
            schedules = ?schedules.keys().collect::<Vec<_>>(),
            users = %config.users_path().display(),
            "loaded campus state"
        );
        Ok(Self::new(UserStore::new(config.users_path()), schedules))
    }

    pub fn new(users: UserStore, schedules: BTreeMap<String, Schedule>) -> Self {
        let calendars = schedules
            .into_iter()
            .map(|(name, schedule)| (name, Mutex::new(Resolver::new(schedule))))
            .collect();

        AppState {
            users,
            calendars: Arc::new(calendars),
        }
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn schedule_names(&self) -> impl Iterator<Item = &str> {
        self.calendars.keys().map(String::as_str)
    }

    /// Lock the resolver of a schedule.
    pub fn calendar(&self, name: &str) -> Result<MutexGuard<'_, Resolver<Schedule>>> {
        let calendar = self
            .calendars
            .get(name)
            .ok_or_else(|| CampusError::ScheduleNotFound(name.to_string()))?;

        calendar
            .lock()
            .map_err(|_| anyhow::anyhow!("Calendar state for '{}' is poisoned", name))
    }
}
