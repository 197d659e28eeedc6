//! HTTP request handlers

use crate::api::{DiscoveryDocument, HealthResponse, HealthStatus, LookupResponse};
use crate::error::{ApiError, ApiResult, INVALID_BIN_MESSAGE};
use crate::metrics::{self, LatencyTimer, LookupOutcome};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use binlookup_core::LookupError;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

/// Handle BIN lookup
///
/// Also mounted without the path parameter so a missing BIN gets the same
/// 400 body as a short one.
#[instrument(skip_all, fields(bin = tracing::field::Empty))]
pub async fn lookup(
    State(state): State<AppState>,
    bin: Option<Path<String>>,
) -> ApiResult<Json<LookupResponse>> {
    let Some(Path(bin)) = bin else {
        metrics::record_lookup(LookupOutcome::Invalid);
        return Err(ApiError::BadRequest(INVALID_BIN_MESSAGE.to_string()));
    };
    tracing::Span::current().record("bin", bin.as_str());

    let timer = LatencyTimer::new("binlookup_lookup_latency_seconds");
    let result = state.store.lookup(&bin);
    timer.record();

    match result {
        Ok(record) => {
            metrics::record_lookup(LookupOutcome::Found);
            debug!("BIN {} matched", bin);
            Ok(Json(LookupResponse::new(record.clone())))
        }
        Err(e) => {
            let outcome = match e {
                LookupError::InvalidInput { .. } => LookupOutcome::Invalid,
                LookupError::NotFound => LookupOutcome::NotFound,
            };
            metrics::record_lookup(outcome);
            debug!("BIN {} lookup failed: {}", bin, e);
            Err(e.into())
        }
    }
}

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Ok,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        bin_count: state.bin_count(),
    })
}

/// Root discovery document
pub async fn root() -> Json<DiscoveryDocument> {
    Json(DiscoveryDocument::current())
}

/// Prometheus metrics endpoint
pub async fn metrics() -> ApiResult<String> {
    metrics::get_prometheus_metrics()
        .ok_or_else(|| ApiError::Internal("Prometheus recorder not installed".to_string()))
}
