//! Resolved calendar events.
//!
//! A `ResolvedEvent` is what a single day of the calendar shows. It is
//! computed fresh every time a day is resolved and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::{DatedCategory, DatedEntry, RecurringCategory, RecurringEntry, TimeSlot};

/// Lecture or lab, for course events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionFormat {
    Lecture,
    Lab,
}

/// The category of a resolved event together with its detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum EventKind {
    Holiday,
    Academic,
    Assignment {
        course: String,
    },
    Meeting {
        topic: String,
    },
    Course {
        slot: TimeSlot,
        room: String,
        instructor: String,
        format: SessionFormat,
    },
    Topic {
        slot: TimeSlot,
        room: String,
        facilitator: String,
    },
}

/// Payload-free category tag, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Holiday,
    Academic,
    Assignment,
    Meeting,
    Course,
    Topic,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "holiday",
            EventCategory::Academic => "academic",
            EventCategory::Assignment => "assignment",
            EventCategory::Meeting => "meeting",
            EventCategory::Course => "course",
            EventCategory::Topic => "topic",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event visible on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    pub title: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ResolvedEvent {
    pub fn category(&self) -> EventCategory {
        match self.kind {
            EventKind::Holiday => EventCategory::Holiday,
            EventKind::Academic => EventCategory::Academic,
            EventKind::Assignment { .. } => EventCategory::Assignment,
            EventKind::Meeting { .. } => EventCategory::Meeting,
            EventKind::Course { .. } => EventCategory::Course,
            EventKind::Topic { .. } => EventCategory::Topic,
        }
    }

    /// Detail line, e.g. "Holiday", "MATH101" or "09:00-10:30 - Room 201".
    pub fn detail(&self) -> String {
        match &self.kind {
            EventKind::Holiday | EventKind::Academic => "Holiday".to_string(),
            EventKind::Assignment { course } => course.clone(),
            EventKind::Meeting { topic } => topic.clone(),
            EventKind::Course { slot, room, .. } | EventKind::Topic { slot, room, .. } => {
                format!("{} - {}", slot, room)
            }
        }
    }
}

impl fmt::Display for ResolvedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.detail())
    }
}

impl From<&DatedEntry> for ResolvedEvent {
    fn from(entry: &DatedEntry) -> Self {
        let kind = match &entry.category {
            DatedCategory::Holiday => EventKind::Holiday,
            DatedCategory::Academic => EventKind::Academic,
            DatedCategory::Assignment { course } => EventKind::Assignment {
                course: course.clone(),
            },
            DatedCategory::Meeting { topic } => EventKind::Meeting {
                topic: topic.clone(),
            },
        };

        ResolvedEvent {
            title: entry.title.clone(),
            kind,
        }
    }
}

impl From<&RecurringEntry> for ResolvedEvent {
    fn from(entry: &RecurringEntry) -> Self {
        let course = |format| EventKind::Course {
            slot: entry.slot,
            room: entry.location.clone(),
            instructor: entry.facilitator.clone(),
            format,
        };

        let kind = match entry.category {
            RecurringCategory::Lecture => course(SessionFormat::Lecture),
            RecurringCategory::Lab => course(SessionFormat::Lab),
            RecurringCategory::Topic => EventKind::Topic {
                slot: entry.slot,
                room: entry.location.clone(),
                facilitator: entry.facilitator.clone(),
            },
        };

        ResolvedEvent {
            title: entry.label.clone(),
            kind,
        }
    }
}
