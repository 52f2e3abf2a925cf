//! puller entry point - the composition root.

use clap::Parser;

use puller_axum::{ServerConfig, start_server};
use puller_cli::{Cli, init_logging};
use puller_core::{PullerSettings, SystemEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let settings = PullerSettings::from_env(&SystemEnv)?;
    start_server(ServerConfig::new(cli.host, cli.port, settings)).await
}
