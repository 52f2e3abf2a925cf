//! Pull handler - the webhook endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use puller_core::{PullRequest, PullerError};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::HttpError;
use crate::state::AppState;

/// Success body for a completed pull.
#[derive(Debug, Serialize)]
pub struct PullResponse {
    pub success: bool,
}

/// Resolve the named app and pull its directory.
///
/// Any body that does not deserialize into `{"app": "<string>"}` is
/// rejected before either external command runs.
pub async fn pull(
    State(state): State<AppState>,
    body: Result<Json<PullRequest>, JsonRejection>,
) -> Result<Json<PullResponse>, HttpError> {
    let app = match body {
        Ok(Json(req)) => req.validate()?,
        Err(rejection) => {
            debug!(
                target: "puller.http",
                reason = %rejection.body_text(),
                "Rejected pull request body"
            );
            return Err(PullerError::InvalidRequest.into());
        }
    };

    info!(target: "puller.http", app = %app, "Pull requested");
    state.pull.pull_app(&app).await?;

    Ok(Json(PullResponse { success: true }))
}
