//! Prometheus metrics collection for BINLOOKUP server
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_prometheus`] installs a recorder.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Instant;

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!(
        "binlookup_lookups_total",
        "Total number of BIN lookups by outcome"
    );
    describe_histogram!(
        "binlookup_lookup_latency_seconds",
        "BIN lookup latency in seconds"
    );
    describe_gauge!("binlookup_records_loaded", "Number of BIN records in the store");
}

/// Outcome label for a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A record matched
    Found,
    /// No record matched
    NotFound,
    /// The prefix was rejected
    Invalid,
}

impl LookupOutcome {
    /// Label value
    pub fn as_str(self) -> &'static str {
        match self {
            LookupOutcome::Found => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::Invalid => "invalid",
        }
    }
}

/// Record a lookup
pub fn record_lookup(outcome: LookupOutcome) {
    counter!("binlookup_lookups_total", 1, "outcome" => outcome.as_str());
}

/// Update the loaded record gauge
pub fn update_store_metrics(records: usize) {
    gauge!("binlookup_records_loaded", records as f64);
}

/// Timer for measuring operation latency
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Start timing into the histogram `metric_name`
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Record elapsed seconds since `new`
    pub fn record(self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        histogram!(self.metric_name, elapsed);
    }
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Install the Prometheus recorder and keep its handle
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Failed to set Prometheus handle"))?;
    Ok(())
}

/// Render metrics in Prometheus text format, if a recorder is installed
pub fn get_prometheus_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|handle| handle.render())
}
