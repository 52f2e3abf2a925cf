//! Command-line entry point support for the puller server.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by main.rs binary
use dotenvy as _;
use puller_core as _;
use tokio as _;
use tracing as _;

pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use logging::init_logging;
pub use parser::Cli;
