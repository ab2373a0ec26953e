//! Error types for the status-reconciliation subsystem.
//!
//! The taxonomy mirrors the propagation policy: index corruption is always
//! caught and downgraded to a recovery attempt, so the only fatal outcome
//! of a status request is [`ManagerError::RecoveryFailed`]. Per-entry
//! resolution failures are diagnostics on the report rows, never errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::index::{CorruptIndexError, RefreshError};

use super::extractor::ExtractionError;

/// Convenience result alias for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Errors raised by manager operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Catalog file was missing, unreadable, or unparseable.
    #[error("corrupt library index: {0}")]
    CorruptIndex(#[from] CorruptIndexError),

    /// Recovery could not enumerate the libraries directory. This is the
    /// one fatal outcome of a status request.
    #[error("recovery failed: cannot enumerate libraries in {path}: {source}")]
    RecoveryFailed { path: PathBuf, source: io::Error },

    /// A filesystem read failed.
    #[error("cannot read {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    /// A filesystem write or removal failed.
    #[error("cannot write {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    /// The remote catalog could not be fetched.
    #[error("index fetch failed for {url}: {reason}")]
    IndexFetchFailed { url: String, reason: String },

    /// The fetch timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// A fetched catalog payload could not be validated or written.
    #[error("index refresh failed: {0}")]
    IndexRefreshFailed(#[from] RefreshError),

    /// Archive extraction failed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
