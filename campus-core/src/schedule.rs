//! Schedules: named sets of recurring and dated entries.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::CampusConfig;
use crate::entry::{DatedEntry, RecurringEntry};
use crate::error::{CampusError, CampusResult};
use crate::source::EntrySource;

/// Names of the schedules compiled into the library.
pub const BUILTIN_SCHEDULES: &[&str] = &["courses", "meetings"];

static COURSES_TOML: &str = include_str!("../schedules/courses.toml");
static MEETINGS_TOML: &str = include_str!("../schedules/meetings.toml");

/// A static set of entries, loaded once and never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub recurring: Vec<RecurringEntry>,

    #[serde(default)]
    pub dated: Vec<DatedEntry>,
}

impl Schedule {
    pub fn from_toml(content: &str) -> CampusResult<Self> {
        toml::from_str(content).map_err(|e| CampusError::Schedule(e.to_string()))
    }

    /// Load a schedule from a TOML file with `[[recurring]]` and `[[dated]]` tables.
    ///
    /// Dates are quoted strings (`date = "2024-12-25"`); bare TOML dates are rejected.
    pub fn load(path: &Path) -> CampusResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::Schedule(format!("Could not read {}: {e}", path.display()))
        })?;

        let schedule = Self::from_toml(&content).map_err(|e| {
            CampusError::Schedule(format!("{}: {e}", path.display()))
        })?;

        if schedule.is_empty() {
            tracing::warn!(path = %path.display(), "schedule file has no entries");
        }

        tracing::debug!(
            path = %path.display(),
            recurring = schedule.recurring.len(),
            dated = schedule.dated.len(),
            "loaded schedule"
        );

        Ok(schedule)
    }

    /// One of the schedules compiled into the library.
    pub fn builtin(name: &str) -> CampusResult<Self> {
        match name {
            "courses" => Self::from_toml(COURSES_TOML),
            "meetings" => Self::from_toml(MEETINGS_TOML),
            _ => Err(CampusError::ScheduleNotFound(name.to_string())),
        }
    }

    pub fn courses() -> CampusResult<Self> {
        Self::builtin("courses")
    }

    pub fn meetings() -> CampusResult<Self> {
        Self::builtin("meetings")
    }

    pub fn is_empty(&self) -> bool {
        self.recurring.is_empty() && self.dated.is_empty()
    }
}

impl EntrySource for Schedule {
    fn dated_on(&self, date: NaiveDate) -> Vec<&DatedEntry> {
        self.dated.iter().filter(|e| e.date == date).collect()
    }

    fn recurring_on(&self, weekday: Weekday) -> Vec<&RecurringEntry> {
        self.recurring.iter().filter(|e| e.weekday == weekday).collect()
    }
}

/// Resolve a schedule by name: a configured file wins over the built-in.
pub fn load_schedule(config: &CampusConfig, name: &str) -> CampusResult<Schedule> {
    match config.schedule_path(name) {
        Some(path) => Schedule::load(&path),
        None => Schedule::builtin(name),
    }
}

/// Every schedule known to this configuration: the built-ins plus any extra
/// names declared under `[schedules]`.
pub fn load_schedules(config: &CampusConfig) -> CampusResult<BTreeMap<String, Schedule>> {
    let names = BUILTIN_SCHEDULES
        .iter()
        .map(|n| n.to_string())
        .chain(config.schedules.keys().cloned());

    let mut schedules = BTreeMap::new();
    for name in names {
        if schedules.contains_key(&name) {
            continue;
        }
        let schedule = load_schedule(config, &name)?;
        schedules.insert(name, schedule);
    }

    Ok(schedules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DatedCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builtin_schedules_parse() {
        let courses = Schedule::courses().unwrap();
        assert_eq!(courses.recurring.len(), 10);
        assert_eq!(courses.dated.len(), 7);

        let meetings = Schedule::meetings().unwrap();
        assert_eq!(meetings.recurring.len(), 10);
        assert_eq!(meetings.dated.len(), 7);
    }

    #[test]
    fn unknown_builtin_is_an_error() {
        let err = Schedule::builtin("labs").unwrap_err();
        assert!(matches!(err, CampusError::ScheduleNotFound(name) if name == "labs"));
    }

    #[test]
    fn dated_on_matches_exact_date_only() {
        let courses = Schedule::courses().unwrap();

        let christmas = courses.dated_on(date(2024, 12, 25));
        assert_eq!(christmas.len(), 1);
        assert_eq!(christmas[0].title, "Christmas Day");
        assert_eq!(christmas[0].category, DatedCategory::Holiday);

        assert!(courses.dated_on(date(2023, 12, 25)).is_empty());
        assert!(courses.dated_on(date(2024, 12, 24)).is_empty());
    }

    #[test]
    fn recurring_on_keeps_declaration_order() {
        let courses = Schedule::courses().unwrap();
        let monday: Vec<_> = courses
            .recurring_on(Weekday::Mon)
            .into_iter()
            .map(|e| e.label.as_str())
            .collect();

        assert_eq!(
            monday,
            ["Advanced Mathematics", "English Literature", "Physics Fundamentals"]
        );
        assert!(courses.recurring_on(Weekday::Sun).is_empty());
    }

    #[test]
    fn empty_toml_is_an_empty_schedule() {
        let schedule = Schedule::from_toml("").unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn dates_must_be_quoted() {
        let bare = r#"
[[dated]]
date = 2024-12-25
title = "Christmas Day"
category = "holiday"
"#;
        assert!(matches!(Schedule::from_toml(bare), Err(CampusError::Schedule(_))));

        let quoted = bare.replace("2024-12-25", "\"2024-12-25\"");
        let schedule = Schedule::from_toml(&quoted).unwrap();
        assert_eq!(schedule.dated[0].date, date(2024, 12, 25));
    }

    #[test]
    fn configured_file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.toml");
        std::fs::write(
            &path,
            r#"
[[dated]]
date = "2025-03-03"
title = "Reading Week"
category = "academic"
"#,
        )
        .unwrap();

        let mut config = CampusConfig::default();
        config.schedules.insert("courses".into(), path.clone());
        config.schedules.insert("labs".into(), path);

        let schedules = load_schedules(&config).unwrap();
        assert_eq!(
            schedules.keys().map(String::as_str).collect::<Vec<_>>(),
            ["courses", "labs", "meetings"]
        );
        assert_eq!(schedules["courses"].dated.len(), 1);
        assert!(schedules["courses"].recurring.is_empty());
        assert_eq!(schedules["meetings"].recurring.len(), 10);
    }

    #[test]
    fn unreadable_schedule_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Schedule::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CampusError::Schedule(_)));
    }
}
