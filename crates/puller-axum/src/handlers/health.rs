//! Liveness handler.

/// Health check body.
pub const HEALTH_TEXT: &str = "Puller is running";

/// Report that the server is up. Touches no external command.
pub async fn status() -> &'static str {
    HEALTH_TEXT
}
