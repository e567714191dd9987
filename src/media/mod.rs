//! Normalized media records and the scan operations that produce them.

pub mod query;
pub mod record;
pub mod scan;

pub use record::{AudioRecord, VideoRecord};
pub use scan::MediaScanner;

use crate::index::IndexError;

/// Whole-scan failure. Per-row problems never surface here; a bad row is
/// dropped and the scan carries on. An empty result list is a success, not
/// an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    /// Media read access is missing: either refused up front by the access
    /// policy, or revoked underneath a previously working index.
    #[error("media read access denied")]
    AccessDenied,
}

impl From<IndexError> for ScanError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::AccessDenied => ScanError::AccessDenied,
        }
    }
}
