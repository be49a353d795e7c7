//! # MindMate, an empathetic mental-health companion
//!
//! Starts the HTTP gateway: chat sessions, mood tracking, guided
//! exercises, and knowledge-grounded companion replies.
//!
//! Usage:
//!   mindmate                       # Start on the configured host/port
//!   mindmate --port 8080           # Override port
//!   mindmate --config ./dev.toml   # Explicit config file

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindmate_core::config::MindmateConfig;

#[derive(Parser)]
#[command(
    name = "mindmate",
    version,
    about = "MindMate mental-health companion service"
)]
struct Cli {
    /// Gateway port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Gateway host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Path to config file (default: ~/.mindmate/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "debug,hyper=info,reqwest=info"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => MindmateConfig::load_from(std::path::Path::new(path))?,
        None => MindmateConfig::load()?,
    };
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }

    tracing::info!("Starting MindMate v{}", env!("CARGO_PKG_VERSION"));
    mindmate_gateway::start(config).await
}
