//! Process-level serving: load the store once, bind, run until Ctrl-C

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::telemetry;
use axum::{extract::Request, ServiceExt};
use binlookup_core::RecordStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Install logging for `config`, serve, then flush telemetry
///
/// Shared by the server binary and `binlookup serve`.
pub async fn run(config: &ServerConfig) -> anyhow::Result<()> {
    telemetry::init_from_config(config)?;

    info!(
        "Starting BINLOOKUP HTTP Server v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let result = serve(config).await;

    if config.otel_enabled {
        info!("Flushing OpenTelemetry traces...");
        telemetry::shutdown_telemetry();
    }

    result
}

/// Load the record store and serve the application until shutdown
///
/// A missing or malformed data file is not an error here; the store is
/// empty and every lookup answers 404.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(RecordStore::load_or_empty(&config.data_path));
    if store.is_empty() {
        warn!(
            "BIN store is empty; every lookup will report not found (data path: {})",
            config.data_path.display()
        );
    }

    if config.metrics_enabled {
        crate::metrics::init_prometheus()?;
        crate::metrics::init_metrics();
        crate::metrics::update_store_metrics(store.len());
        info!("Prometheus metrics enabled at /metrics");
    }

    let state = AppState::with_metrics(store, config.metrics_enabled);
    let app = crate::app(state.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete after {}s", state.uptime_seconds());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, shutting down gracefully...");
}
