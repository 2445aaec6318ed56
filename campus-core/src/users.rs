//! Flat-file user store.
//!
//! Users live in a plain text file, one `email,password` pair per line.
//! Blank lines are ignored and each line is trimmed before parsing.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CampusError, CampusResult};

/// A user record as stored in the users file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An authenticated user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check an email/password pair against the users file.
    ///
    /// The email is trimmed before comparison; the password must match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> CampusResult<User> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CampusError::MissingCredentials);
        }

        if !self.path.exists() {
            return Err(CampusError::UserStore("User database not found".into()));
        }

        let email = email.trim();
        let user = self
            .list()?
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .map(|u| User { email: u.email });

        match user {
            Some(user) => {
                tracing::info!(email = %user.email, "login succeeded");
                Ok(user)
            }
            None => {
                tracing::info!(email, "login rejected");
                Err(CampusError::InvalidCredentials)
            }
        }
    }

    /// Every record in the users file.
    pub fn list(&self) -> CampusResult<Vec<Credentials>> {
        let content = self.read()?;
        Ok(content.lines().filter_map(parse_line).collect())
    }

    /// Append a new user. Fails if the email is already present.
    ///
    /// The users file (and its directory) is created on the first add.
    pub fn add(&self, email: &str, password: &str) -> CampusResult<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CampusError::MissingCredentials);
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(CampusError::UserStore(format!("Could not read users file: {e}"))),
        };
        if content.lines().filter_map(parse_line).any(|u| u.email == email) {
            return Err(CampusError::UserExists(email.to_string()));
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CampusError::UserStore(format!("Could not create users directory: {e}")))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CampusError::UserStore(format!("Could not add user: {e}")))?;

        // Keep one record per line even if the file lacks a trailing newline
        let separator = if content.is_empty() || content.ends_with('\n') { "" } else { "\n" };
        writeln!(file, "{separator}{email},{password}")
            .map_err(|e| CampusError::UserStore(format!("Could not add user: {e}")))?;

        tracing::info!(email, "user added");
        Ok(())
    }

    /// Remove a user by email, rewriting the file without it.
    pub fn remove(&self, email: &str) -> CampusResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CampusError::MissingCredentials);
        }

        let content = self.read()?;
        let lines: Vec<&str> = content.lines().collect();
        let kept: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| parse_line(line).is_none_or(|u| u.email != email))
            .collect();

        if kept.len() == lines.len() {
            return Err(CampusError::UserNotFound(email.to_string()));
        }

        let mut output = kept.join("\n");
        if !output.is_empty() {
            output.push('\n');
        }
        std::fs::write(&self.path, output)
            .map_err(|e| CampusError::UserStore(format!("Could not remove user: {e}")))?;

        tracing::info!(email, "user removed");
        Ok(())
    }

    fn read(&self) -> CampusResult<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| CampusError::UserStore(format!("Could not read users file: {e}")))
    }
}

/// Parse one `email,password` line. Blank lines yield nothing.
fn parse_line(line: &str) -> Option<Credentials> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut parts = line.split(',');
    let email = parts.next().unwrap_or_default().to_string();
    let password = parts.next().unwrap_or_default().to_string();

    Some(Credentials { email, password })
}
