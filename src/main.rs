//! DevOps info service entry point.

use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devops_info_service::api::AppState;
use devops_info_service::config::{Config, LogFormat};
use devops_info_service::metrics;
use devops_info_service::server;
use devops_info_service::utils::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime is measured from here
    let started_at = Instant::now();

    // Load configuration; logging needs it, so fall back to defaults
    // long enough to report a bad environment.
    let loaded = Config::load();
    let fallback = Config::default();
    init_logging(loaded.as_ref().unwrap_or(&fallback));

    let config = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting application...");
    if config.debug {
        info!("Debug logging enabled");
    }

    // Initialize metrics
    metrics::init_metrics();
    if let Some(port) = config.metrics_port {
        metrics::install_exporter(port)?;
    }

    // Start HTTP server
    let listener = server::bind(&config).await?;
    let state = AppState::new(started_at);

    server::serve(listener, state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber from config.
fn init_logging(config: &Config) {
    let filter = if config.debug {
        EnvFilter::new("devops_info_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
