//! Error types for the campus portal.

use thiserror::Error;

/// Errors that can occur in campus operations.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schedule error: {0}")]
    Schedule(String),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(String),

    #[error("User database error: {0}")]
    UserStore(String),

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Result type alias for campus operations.
pub type CampusResult<T> = Result<T, CampusError>;
