//! Domain types for application resolution and pulls.
//!
//! These are pure data types with no process or HTTP dependencies.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PullerError;

/// A single application as reported by the inventory command.
///
/// Only `name` and `dir` are read; any other fields the inventory prints
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Application name, compared by exact string equality.
    pub name: String,
    /// Working directory the pull runs in.
    pub dir: PathBuf,
}

impl AppRecord {
    /// Create a new application record.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }
}

/// Inbound pull request payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Name of the application to pull.
    pub app: String,
}

impl PullRequest {
    /// Validate the payload, returning the application name.
    ///
    /// Blank names are rejected the same way as a missing field.
    pub fn validate(self) -> Result<String, PullerError> {
        if self.app.trim().is_empty() {
            return Err(PullerError::InvalidRequest);
        }
        Ok(self.app)
    }
}
