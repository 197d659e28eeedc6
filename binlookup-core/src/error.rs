//! Error types for BIN record loading and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Failure to populate the record store from its data source
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data file could not be read
    #[error("Failed to read BIN data from {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of objects
    #[error("Failed to parse BIN data from {}: {source}", path.display())]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory document is not a JSON array of objects
    #[error("Invalid BIN document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a lookup that did not produce a record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Prefix is shorter than the minimum length
    #[error("Invalid input: prefix must contain at least {min_len} characters, got {actual}")]
    InvalidInput {
        /// Required minimum length
        min_len: usize,
        /// Length of the rejected prefix
        actual: usize,
    },

    /// No stored record starts with the prefix
    #[error("BIN not found")]
    NotFound,
}
