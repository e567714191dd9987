//! Named-operation dispatch consumed by the host application layer. The host
//! hands over an operation name and receives either the serialized record
//! list or a structured failure with a machine-readable code.

use serde_json::Value;

use crate::access::AccessPolicy;
use crate::index::MediaIndex;
use crate::media::{MediaScanner, ScanError};
use crate::thumbs::PreviewRenderer;

pub const OP_SCAN_VIDEOS: &str = "scanVideos";
pub const OP_SCAN_AUDIO: &str = "scanAudio";

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Storage permission required")]
    PermissionDenied,
    /// The operation name is not one this boundary knows. Deliberately
    /// distinct from every scan failure.
    #[error("unknown operation: {0}")]
    NotImplemented(String),
    #[error("failed to encode scan result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DispatchError {
    /// Stable machine-readable code for the host side.
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::PermissionDenied => "PERMISSION_DENIED",
            DispatchError::NotImplemented(_) => "NOT_IMPLEMENTED",
            DispatchError::Encode(_) => "INTERNAL",
        }
    }
}

impl From<ScanError> for DispatchError {
    fn from(e: ScanError) -> Self {
        match e {
            ScanError::AccessDenied => DispatchError::PermissionDenied,
        }
    }
}

/// Run the named scan operation and serialize its result to an array of
/// string-keyed maps. An empty array is a valid success (zero media found)
/// and is never turned into a failure.
pub fn dispatch<I, R, P>(
    scanner: &MediaScanner<I, R, P>,
    operation: &str,
) -> Result<Value, DispatchError>
where
    I: MediaIndex,
    R: PreviewRenderer,
    P: AccessPolicy,
{
    match operation {
        OP_SCAN_VIDEOS => {
            let records = scanner.scan_videos()?;
            Ok(serde_json::to_value(records)?)
        }
        OP_SCAN_AUDIO => {
            let records = scanner.scan_audio()?;
            Ok(serde_json::to_value(records)?)
        }
        other => Err(DispatchError::NotImplemented(other.to_string())),
    }
}
