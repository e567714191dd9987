//! Scan orchestration: the externally visible unit of work.

use crate::access::AccessPolicy;
use crate::index::MediaIndex;
use crate::media::query;
use crate::media::record::{AudioRecord, VideoRecord};
use crate::media::ScanError;
use crate::thumbs::{PreviewRenderer, ThumbnailCache};

/// Composes the index, the thumbnail cache, and the access policy into the
/// two scan operations. Each scan is one synchronous blocking unit of work
/// (index query and thumbnail generation both block on I/O), so hosts run it
/// on a worker, not their main execution context. Once started, a scan runs
/// to completion; cancellation is the caller's timeout-and-discard.
#[derive(Debug)]
pub struct MediaScanner<I, R, P> {
    index: I,
    thumbs: ThumbnailCache<R>,
    access: P,
}

impl<I, R, P> MediaScanner<I, R, P>
where
    I: MediaIndex,
    R: PreviewRenderer,
    P: AccessPolicy,
{
    pub fn new(index: I, thumbs: ThumbnailCache<R>, access: P) -> Self {
        MediaScanner {
            index,
            thumbs,
            access,
        }
    }

    /// Full video listing, newest first, each record carrying its cached
    /// thumbnail path or None. The returned Vec is a complete materialized
    /// snapshot, never a lazy stream.
    pub fn scan_videos(&self) -> Result<Vec<VideoRecord>, ScanError> {
        self.check_access()?;
        query::query_videos(&self.index, &self.thumbs)
    }

    /// Full music listing, title order.
    pub fn scan_audio(&self) -> Result<Vec<AudioRecord>, ScanError> {
        self.check_access()?;
        query::query_audio(&self.index)
    }

    /// Fail fast before touching the index when access is not held, and let
    /// the host know it should start its permission flow.
    fn check_access(&self) -> Result<(), ScanError> {
        if self.access.media_read_granted() {
            return Ok(());
        }
        tracing::warn!("scan refused: media read access not granted");
        self.access.request_media_read();
        Err(ScanError::AccessDenied)
    }
}
