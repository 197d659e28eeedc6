//! Immutable in-memory record store
//!
//! The store is populated once from a JSON array and never changes
//! afterwards. Entries that are not objects are kept and never match.
//! Loading is fail-soft: `load_or_empty` logs the failure and hands back an
//! empty store so the service stays up.

use crate::error::LoadError;
use crate::record::BinRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Ordered collection of BIN records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<BinRecord>,
}

/// Counts describing what was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    /// Number of records in the store
    pub total: usize,
    /// Records with a string `number` field
    pub with_number: usize,
    /// Records that can never match a lookup
    pub without_number: usize,
    /// Entries that are not JSON objects, counted in `without_number` too
    pub non_object: usize,
}

impl RecordStore {
    /// Create an empty store
    pub fn empty() -> Self {
        RecordStore::default()
    }

    /// Create a store from records, keeping their order
    pub fn from_records(records: Vec<BinRecord>) -> Self {
        RecordStore { records }
    }

    /// Parse a store from an in-memory JSON document
    pub fn from_json_str(document: &str) -> Result<Self, LoadError> {
        let records: Vec<BinRecord> = serde_json::from_str(document)?;
        Ok(RecordStore::from_records(records))
    }

    /// Read and parse the data file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading BIN data from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<BinRecord> =
            serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(RecordStore::from_records(records))
    }

    /// Load the data file, degrading to an empty store on failure
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match RecordStore::load(path) {
            Ok(store) => {
                info!("Loaded {} BIN records", store.len());
                let summary = store.summary();
                if summary.non_object > 0 {
                    warn!(
                        "{} BIN entries are not JSON objects and will never match",
                        summary.non_object
                    );
                }
                if summary.without_number > summary.non_object {
                    warn!(
                        "{} BIN records have no string `number` field and will never match",
                        summary.without_number - summary.non_object
                    );
                }
                store
            }
            Err(e) => {
                error!("Error loading BIN data: {}", e);
                RecordStore::empty()
            }
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, BinRecord> {
        self.records.iter()
    }

    /// All records in stored order
    pub fn records(&self) -> &[BinRecord] {
        &self.records
    }

    /// Summarize the loaded records
    pub fn summary(&self) -> StoreSummary {
        let with_number = self.iter().filter(|r| r.number().is_some()).count();
        let non_object = self.iter().filter(|r| !r.is_object()).count();
        StoreSummary {
            total: self.len(),
            with_number,
            without_number: self.len() - with_number,
            non_object,
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a BinRecord;
    type IntoIter = std::slice::Iter<'a, BinRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
