//! Axum-specific error types and mappings.
//!
//! This module maps [`PullerError`] to HTTP status codes and response
//! bodies. Request and resolution failures are client errors (400); pull
//! failures are server errors (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use puller_core::PullerError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid body, unknown app, inventory failure).
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        error_type: &'static str,
    },

    /// Internal server error (pull failure).
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        error_type: &'static str,
    },
}

impl HttpError {
    /// The status code this error responds with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (Self::BadRequest {
            message,
            error_type,
        }
        | Self::Internal {
            message,
            error_type,
        }) = self;

        let body = ErrorBody {
            message,
            status: status.as_u16(),
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<PullerError> for HttpError {
    fn from(err: PullerError) -> Self {
        let error_type = err.kind();
        let message = err.to_string();
        if err.is_resolution_failure() {
            Self::BadRequest {
                message,
                error_type,
            }
        } else {
            Self::Internal {
                message,
                error_type,
            }
        }
    }
}
