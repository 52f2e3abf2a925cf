//! HTTP request handlers.
//!
//! Handlers are thin wrappers that delegate to `PullService`.

pub mod health;
pub mod pull;
