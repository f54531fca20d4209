//! Regime Analyzer API Server
//!
//! Serves the analyzed scenario table over HTTP. The table is built once
//! at startup and is read-only, so instances can be scaled horizontally.

use dotenvy::dotenv;
use regime_analyzer::config::{get_environment, ServerConfig};
use regime_analyzer::core::http::start_server;
use regime_analyzer::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ServerConfig::from_env()?;

    info!("Starting Regime Analyzer API Server");
    info!(environment = %get_environment(), "Environment");
    info!(port = config.port, "HTTP Server: http://{}:{}", config.host, config.port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
