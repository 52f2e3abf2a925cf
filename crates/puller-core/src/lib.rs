//! Core domain for puller.
//!
//! Resolves an application's directory through an external inventory
//! command and runs a version-control pull inside it. All process execution
//! goes through the [`ports::CommandRunner`] port; adapters provide the
//! implementation and map [`PullerError`] onto their own surfaces.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod env;
pub mod error;
pub mod inventory;
pub mod locks;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{AppRecord, PullRequest};
pub use env::{EnvProvider, MapEnv, SystemEnv};
pub use error::PullerError;
pub use inventory::{find_app, parse_inventory};
pub use locks::DirectoryLocks;
pub use ports::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
pub use services::PullService;
pub use settings::{
    DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_GIT_COMMAND, DEFAULT_INVENTORY_COMMAND,
    DEFAULT_REQUEST_TIMEOUT_SECS, InventoryExecutable, PullerSettings, SettingsError,
};
