//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Create the router.
///
/// `GET /` is the health check and `POST /` the pull webhook. Requests
/// exceeding the context's request timeout get 408.
pub fn create_router(ctx: AxumContext) -> Router {
    let request_timeout = ctx.request_timeout;
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route(
            "/",
            get(handlers::health::status).post(handlers::pull::pull),
        )
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
