//! First-match prefix lookup over the record store

use crate::error::LookupError;
use crate::record::BinRecord;
use crate::store::RecordStore;
use tracing::{instrument, trace};

/// Minimum number of characters a lookup prefix must have
pub const MIN_PREFIX_LEN: usize = 6;

/// Reject prefixes shorter than [`MIN_PREFIX_LEN`] characters
///
/// Length is measured in UTF-16 code units, the way browser and JSON clients
/// measure string length. For digit BINs this equals the byte count.
pub fn validate_prefix(prefix: &str) -> Result<(), LookupError> {
    let actual = prefix.encode_utf16().count();
    if actual < MIN_PREFIX_LEN {
        return Err(LookupError::InvalidInput {
            min_len: MIN_PREFIX_LEN,
            actual,
        });
    }
    Ok(())
}

/// Find the first record, in stored order, whose `number` starts with `prefix`
///
/// The match is an exact, case-sensitive character prefix with no
/// normalization of separators or whitespace.
#[instrument(level = "trace", skip(store), fields(records = store.len()))]
pub fn lookup<'a>(store: &'a RecordStore, prefix: &str) -> Result<&'a BinRecord, LookupError> {
    validate_prefix(prefix)?;

    let found = store.iter().find(|record| record.matches_prefix(prefix));
    trace!(matched = found.is_some(), "scan complete");

    found.ok_or(LookupError::NotFound)
}

impl RecordStore {
    /// Look up `prefix` in this store
    pub fn lookup(&self, prefix: &str) -> Result<&BinRecord, LookupError> {
        lookup(self, prefix)
    }
}
