//! BINLOOKUP Core - in-memory BIN record store and prefix lookup
//!
//! This crate holds the immutable record set loaded at startup and the
//! first-match prefix search that resolves a BIN to its issuer record.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod lookup;
pub mod record;
pub mod store;

pub use error::{LoadError, LookupError};
pub use lookup::{lookup, validate_prefix, MIN_PREFIX_LEN};
pub use record::BinRecord;
pub use store::{RecordStore, StoreSummary};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
