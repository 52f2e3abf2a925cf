//! Error taxonomy for the pull pipeline.
//!
//! Every failure is terminal for the current request only. Adapters map
//! these variants to their own surfaces (HTTP status codes, exit codes).

use thiserror::Error;

use crate::ports::ProcessError;

/// Failure of one step of the validate → resolve → pull pipeline.
#[derive(Debug, Error)]
pub enum PullerError {
    /// The request body is missing `app`, or `app` is not a non-blank string.
    #[error("Invalid request body")]
    InvalidRequest,

    /// The inventory command could not be run (spawn failure or timeout).
    #[error("Inventory command unavailable: {0}")]
    InventoryUnavailable(#[source] ProcessError),

    /// The inventory command exited unsuccessfully.
    ///
    /// Displays as the captured stderr text.
    #[error("{stderr}")]
    InventoryCommandFailed { code: Option<i32>, stderr: String },

    /// The inventory output was not a JSON array of application records.
    #[error("{0}")]
    InventoryParse(String),

    /// No application with the requested name exists in the inventory.
    #[error("App {0} not found")]
    AppNotFound(String),

    /// The version-control command could not be run (spawn failure or timeout).
    #[error("Pull command unavailable: {0}")]
    PullUnavailable(#[source] ProcessError),

    /// The version-control command exited unsuccessfully.
    ///
    /// Displays as the captured stderr text.
    #[error("{stderr}")]
    PullCommandFailed { code: Option<i32>, stderr: String },
}

impl PullerError {
    /// Whether the failure happened before the pull step ran.
    ///
    /// Request and resolution failures are client-correctable; pull
    /// failures are environment problems on the server side.
    pub const fn is_resolution_failure(&self) -> bool {
        !matches!(
            self,
            Self::PullUnavailable(_) | Self::PullCommandFailed { .. }
        )
    }

    /// Stable discriminant for clients and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InventoryUnavailable(_) => "INVENTORY_UNAVAILABLE",
            Self::InventoryCommandFailed { .. } => "INVENTORY_COMMAND_FAILED",
            Self::InventoryParse(_) => "INVENTORY_PARSE_ERROR",
            Self::AppNotFound(_) => "APP_NOT_FOUND",
            Self::PullUnavailable(_) => "PULL_UNAVAILABLE",
            Self::PullCommandFailed { .. } => "PULL_COMMAND_FAILED",
        }
    }
}
