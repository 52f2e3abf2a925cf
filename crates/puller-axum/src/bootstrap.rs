//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The concrete command runner is instantiated here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use puller_core::ports::CommandRunner;
use puller_core::{InventoryExecutable, PullService, PullerSettings};
use puller_runtime::TokioCommandRunner;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// Pull pipeline settings.
    pub settings: PullerSettings,
}

impl ServerConfig {
    /// Create a config listening on `host:port`.
    pub const fn new(host: IpAddr, port: u16, settings: PullerSettings) -> Self {
        Self {
            host,
            port,
            settings,
        }
    }

    /// Config listening on all interfaces on the default port.
    pub fn with_defaults() -> Self {
        Self::new(
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            DEFAULT_PORT,
            PullerSettings::default(),
        )
    }

    /// Socket address to bind.
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The pull pipeline.
    pub pull: Arc<PullService>,
    /// Upper bound on each HTTP request.
    pub request_timeout: Duration,
}

impl AxumContext {
    /// Assemble a context around an existing pull service.
    pub const fn new(pull: Arc<PullService>, request_timeout: Duration) -> Self {
        Self {
            pull,
            request_timeout,
        }
    }
}

/// Wire the pull service to the real process runner.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let settings = &config.settings;

    match &settings.inventory {
        InventoryExecutable::Path(path) => info!(
            target: "puller.config",
            inventory_path = %path.display(),
            "Using explicit inventory executable"
        ),
        InventoryExecutable::SearchPath(name) => info!(
            target: "puller.config",
            inventory_command = %name,
            "Resolving inventory command from PATH"
        ),
    }
    info!(
        target: "puller.config",
        git_command = %settings.git_command,
        command_timeout_secs = settings.command_timeout.as_secs(),
        request_timeout_secs = settings.request_timeout.as_secs(),
        "Pull settings resolved"
    );

    let runner: Arc<dyn CommandRunner> =
        Arc::new(TokioCommandRunner::new(settings.command_timeout));
    let pull = Arc::new(PullService::from_settings(runner, settings));

    AxumContext::new(pull, settings.request_timeout)
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("puller listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("puller stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::with_defaults();
        assert_eq!(config.addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_bootstrap_uses_request_timeout() {
        let mut settings = PullerSettings::default();
        settings.request_timeout = Duration::from_secs(7);
        let config = ServerConfig::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0, settings);

        let ctx = bootstrap(&config);
        assert_eq!(ctx.request_timeout, Duration::from_secs(7));
    }
}
