use crate::index::{AudioRow, ContentLocator, IndexError, MediaIndex, VideoRow};

/// Vec-backed [`MediaIndex`] holding rows handed to it up front.
///
/// Serves two audiences: embedders that materialize rows from some
/// platform-specific source before handing them to the scanner, and tests
/// that need a controllable index. `revoke_access` flips the whole index
/// into the denied state, mimicking a permission grant being withdrawn
/// while the process is running.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    videos: Vec<VideoRow>,
    audio: Vec<AudioRow>,
    revoked: bool,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_videos(mut self, rows: Vec<VideoRow>) -> Self {
        self.videos = rows;
        self
    }

    pub fn with_audio(mut self, rows: Vec<AudioRow>) -> Self {
        self.audio = rows;
        self
    }

    /// Make every subsequent query fail with [`IndexError::AccessDenied`].
    pub fn revoke_access(&mut self) {
        self.revoked = true;
    }
}

impl MediaIndex for MemoryIndex {
    fn videos(&self) -> Result<Vec<VideoRow>, IndexError> {
        if self.revoked {
            return Err(IndexError::AccessDenied);
        }
        Ok(self.videos.clone())
    }

    fn audio_tracks(&self) -> Result<Vec<AudioRow>, IndexError> {
        if self.revoked {
            return Err(IndexError::AccessDenied);
        }
        Ok(self.audio.clone())
    }

    fn video_locator(&self, id: i64) -> ContentLocator {
        ContentLocator::new(format!("memory://video/{}", id))
    }
}
