//! Application state

use binlookup_core::RecordStore;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The BIN records, immutable after load
    pub store: Arc<RecordStore>,

    /// Server start time
    pub start_time: Instant,

    /// Whether `/metrics` is served
    pub metrics_enabled: bool,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
            metrics_enabled: false,
        }
    }

    /// Create application state with the metrics endpoint enabled or not
    pub fn with_metrics(store: Arc<RecordStore>, metrics_enabled: bool) -> Self {
        Self {
            store,
            start_time: Instant::now(),
            metrics_enabled,
        }
    }

    /// Number of loaded records
    pub fn bin_count(&self) -> usize {
        self.store.len()
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
