use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stop_server::config::{ConfigError, ServerConfig};
use stop_server::snapshot::{Snapshot, SnapshotError};
use stop_server::web::{AppState, create_router};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "stop server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Load everything up front; the registry is read-only from here on
    let registry = Snapshot::load(&config.snapshot_path)?.into_registry();
    info!(stops = registry.len(), "stop registry ready");

    let app = create_router(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "stop server listening");
    info!("  GET /health");
    info!("  GET /stops");
    info!("  GET /stops/:id");
    info!("  GET /stops/search?q=");
    info!("  GET /trips?arrival=HH:MM[:SS]");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("stop server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
