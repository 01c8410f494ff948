//! Scout CLI
//!
//! Command-line interface for the fantasy-baseball scouting API.

mod commands;
mod config;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Fantasy baseball scouting report CLI", long_about = None)]
struct Cli {
    /// Scouting API URL
    #[arg(long, env = "SCOUT_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Access token sent as a bearer token
    #[arg(long, env = "SCOUT_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "SCOUT_HTTP_TIMEOUT", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scout_cli=info,scout_poller=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        access_token: cli.token,
        http_timeout: Duration::from_secs(cli.timeout_secs),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
