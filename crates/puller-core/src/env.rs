//! Environment access for settings resolution.
//!
//! Settings are read through [`EnvProvider`] so tests can supply a fixed set
//! of variables instead of mutating the process environment.

use std::collections::HashMap;
use std::ffi::OsString;

/// Source of environment variables.
pub trait EnvProvider {
    /// Get a raw environment variable.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Get a variable as UTF-8 text, trimmed.
    ///
    /// Unset, empty and whitespace-only values all read as `None`.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        let value = value.to_string_lossy();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Reads from the real process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
