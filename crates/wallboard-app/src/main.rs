//! Wallboard console client - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use wallboard_app::{AppConfig, Application, Args};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    wallboard_app::init_logging();

    info!("Starting wallboard v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > WALLBOARD_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("WALLBOARD_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config = AppConfig::load(&config_path)?;
    info!(base_url = %config.base_url, "Configuration loaded");

    let app = Application::new(config)?;
    app.run(args.command).await?;

    Ok(())
}
