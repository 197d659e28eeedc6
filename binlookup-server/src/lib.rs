//! BINLOOKUP HTTP Server - JSON API for BIN prefix lookup
//!
//! This crate exposes the record store over HTTP: prefix lookup, a health
//! check and a root discovery document. [`app`] is the request handler;
//! [`server::serve`] binds it to a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod state;
pub mod telemetry;

pub use api::{DiscoveryDocument, FailureResponse, HealthResponse, LookupResponse};
pub use config::{ConfigError, Environment, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// The routed application with trailing slashes trimmed before routing
pub type App = NormalizePath<Router>;

/// Build the servable application over `state`
///
/// `/api/health/` and `/api/lookup/411111/` route like their slash-less
/// forms. Normalization must wrap the router: `Router::layer` runs after routing.
pub fn app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Build the application router over `state`
///
/// `/metrics` is only mounted when the state has metrics enabled.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/lookup", get(handlers::lookup))
        .route("/api/lookup/:bin", get(handlers::lookup));

    if state.metrics_enabled {
        app = app.route("/metrics", get(handlers::metrics));
    }

    app.with_state(state)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
