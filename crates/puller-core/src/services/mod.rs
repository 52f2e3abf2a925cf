//! Application services.

mod pull_service;

pub use pull_service::PullService;
