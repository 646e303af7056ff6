//! fleetmap - Entry Point
//!
//! Polls the position backend for relay points and drivers and serves
//! the reconciled snapshot to the render layer.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// fleetmap delivery-tracking map service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via FLEETMAP_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    fleetmap_telemetry::init_logging()?;

    info!("Starting fleetmap v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > FLEETMAP_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("FLEETMAP_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");

    let config = fleetmap_app::AppConfig::from_file(&config_path)?;
    info!(
        base_url = %config.feed.base_url,
        dashboard_enabled = config.dashboard.enabled,
        "Configuration loaded"
    );

    let app = fleetmap_app::Application::new(config)?;
    app.run().await?;

    Ok(())
}
