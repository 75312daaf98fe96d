//! # Wire-Driver command line entry point
//!
//! Small driver over a JSON Wire Protocol server.
//!
//! ## Usage
//! - `wire-driver status`: print the server status
//! - `wire-driver <url>`: open a session, load `<url>`, report the page title, quit
//!
//! ## Environment variables
//! - `WIRE_CONFIG`: TOML configuration file, overlaid by the variables below
//! - `WIRE_SERVER_URL`: server base address (default: http://localhost:4444/wd/hub/)
//! - `WIRE_BROWSER`: browser to request (default: firefox)
//! - `WIRE_IMPLICIT_WAIT`: implicit wait in milliseconds
//! - `RUST_LOG`: log filter, falls back to the configured log level

use anyhow::{bail, Context};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wire_driver::{
    command::validate_catalog,
    config::Config,
    transport::{HttpTransport, Transport},
    WebDriver,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::var("WIRE_CONFIG") {
        Ok(path) => Config::from_file(&path)?.overlay_env()?,
        Err(_) => Config::from_env()?,
    };

    // Initialize tracing - respect RUST_LOG environment variable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting wire-driver v{}", wire_driver::VERSION);
    validate_catalog().context("command catalog is inconsistent")?;
    info!("Configuration loaded: server={}, browser={}", config.server_url, config.browser_name);

    let target = match std::env::args().nth(1) {
        Some(target) => target,
        None => bail!("usage: wire-driver status | wire-driver <url>"),
    };

    if target == "status" {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::from_config(&config)?);
        let status = WebDriver::status(transport.as_ref()).await?;
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let driver = WebDriver::connect(&config)
        .await
        .with_context(|| format!("failed to open a session on {}", config.server_url))?;

    let outcome = visit(&driver, &target).await;

    // Always release the remote session
    if let Err(e) = driver.quit().await {
        error!("Failed to quit session: {}", e);
    }

    outcome
}

async fn visit(driver: &WebDriver, url: &str) -> anyhow::Result<()> {
    driver.get(url).await?;

    let current_url = driver.current_url().await?;
    let title = driver.title().await?;
    info!("Loaded {} ({})", current_url, title);
    println!("{}", title);

    Ok(())
}
