//! Settings domain types and validation.
//!
//! All settings come from the environment (see [`PullerSettings::from_env`]).
//! There is no configuration file.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::env::EnvProvider;

/// Explicit path to the inventory executable.
pub const ENV_INVENTORY_PATH: &str = "SMALLWEB_EXEC_PATH";

/// Bare inventory command name, used when no explicit path is set.
pub const ENV_INVENTORY_COMMAND: &str = "PULLER_INVENTORY_COMMAND";

/// Version-control executable.
pub const ENV_GIT_COMMAND: &str = "PULLER_GIT_COMMAND";

/// Per-process timeout in seconds.
pub const ENV_COMMAND_TIMEOUT: &str = "PULLER_COMMAND_TIMEOUT_SECS";

/// Per-request timeout in seconds.
pub const ENV_REQUEST_TIMEOUT: &str = "PULLER_REQUEST_TIMEOUT_SECS";

/// Default inventory command looked up on `PATH`.
pub const DEFAULT_INVENTORY_COMMAND: &str = "smallweb";

/// Default version-control command looked up on `PATH`.
pub const DEFAULT_GIT_COMMAND: &str = "git";

/// Default per-process timeout.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 60;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 180;

/// How the inventory executable is located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryExecutable {
    /// Explicit executable path.
    Path(PathBuf),
    /// Bare command name resolved from `PATH` at spawn time.
    SearchPath(String),
}

impl InventoryExecutable {
    /// The program to hand to the command runner.
    pub fn program(&self) -> std::ffi::OsString {
        match self {
            Self::Path(path) => path.clone().into_os_string(),
            Self::SearchPath(name) => name.into(),
        }
    }
}

impl Default for InventoryExecutable {
    fn default() -> Self {
        Self::SearchPath(DEFAULT_INVENTORY_COMMAND.to_string())
    }
}

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidDuration { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    ZeroDuration { key: &'static str },
}

/// Runtime settings for the pull pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullerSettings {
    /// Inventory executable.
    pub inventory: InventoryExecutable,
    /// Version-control executable.
    pub git_command: String,
    /// Upper bound on each external process invocation.
    pub command_timeout: Duration,
    /// Upper bound on each HTTP request.
    pub request_timeout: Duration,
}

impl Default for PullerSettings {
    fn default() -> Self {
        Self {
            inventory: InventoryExecutable::default(),
            git_command: DEFAULT_GIT_COMMAND.to_string(),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl PullerSettings {
    /// Resolve settings from the environment, falling back to defaults.
    ///
    /// `SMALLWEB_EXEC_PATH`, when set and non-empty, selects an explicit
    /// inventory executable; otherwise the bare command name is used.
    pub fn from_env(env: &dyn EnvProvider) -> Result<Self, SettingsError> {
        let inventory = match env.get_non_empty(ENV_INVENTORY_PATH) {
            Some(path) => InventoryExecutable::Path(PathBuf::from(path)),
            None => InventoryExecutable::SearchPath(
                env.get_non_empty(ENV_INVENTORY_COMMAND)
                    .unwrap_or_else(|| DEFAULT_INVENTORY_COMMAND.to_string()),
            ),
        };

        Ok(Self {
            inventory,
            git_command: env
                .get_non_empty(ENV_GIT_COMMAND)
                .unwrap_or_else(|| DEFAULT_GIT_COMMAND.to_string()),
            command_timeout: read_secs(env, ENV_COMMAND_TIMEOUT, DEFAULT_COMMAND_TIMEOUT_SECS)?,
            request_timeout: read_secs(env, ENV_REQUEST_TIMEOUT, DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

fn read_secs(
    env: &dyn EnvProvider,
    key: &'static str,
    default: u64,
) -> Result<Duration, SettingsError> {
    let Some(raw) = env.get_non_empty(key) else {
        return Ok(Duration::from_secs(default));
    };
    let secs: u64 = raw
        .parse()
        .map_err(|_| SettingsError::InvalidDuration { key, value: raw })?;
    if secs == 0 {
        return Err(SettingsError::ZeroDuration { key });
    }
    Ok(Duration::from_secs(secs))
}
