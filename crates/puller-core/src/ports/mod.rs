//! Port definitions (trait abstractions) for external systems.
//!
//! The core never spawns processes itself. It describes invocations with
//! [`CommandSpec`] and hands them to a [`CommandRunner`] supplied by the
//! composition root.

pub mod command_runner;

use std::time::Duration;
use thiserror::Error;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};

#[cfg(test)]
pub use command_runner::MockCommandRunner;

/// Errors raised while running an external process.
///
/// A process that runs to completion with a non-zero exit status is NOT an
/// error at this level; it is reported through [`CommandOutput::success`].
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be started (not found, not executable, ...).
    #[error("Failed to start {program}: {message}")]
    SpawnFailed { program: String, message: String },

    /// The process did not finish within the configured timeout.
    #[error("{program} did not finish within {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    /// Reading the process output failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The task driving the process ended before reporting a result.
    #[error("{program} task aborted: {message}")]
    Aborted { program: String, message: String },
}
