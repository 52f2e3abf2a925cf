//! Command-line arguments.
//!
//! Only what the server needs to bind and listen. Everything else is read
//! from the environment by `PullerSettings::from_env`.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;

/// Webhook receiver that runs `git pull` for smallweb apps.
#[derive(Debug, Parser)]
#[command(name = "puller")]
#[command(about = "Pull smallweb apps when a webhook arrives")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "PULLER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PULLER_PORT", default_value_t = puller_axum::DEFAULT_PORT)]
    pub port: u16,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Default log level when `RUST_LOG` is unset.
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
