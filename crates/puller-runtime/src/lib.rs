//! Process runtime for puller.
//!
//! Provides the concrete [`puller_core::ports::CommandRunner`] used by the
//! server's composition root.
#![deny(unused_crate_dependencies)]

// Only used by integration tests
#[cfg(test)]
use tempfile as _;

pub mod command;

pub use command::TokioCommandRunner;
