//! Boundary to the platform-maintained device media index: a read-only,
//! queryable catalog of the device's video and audio files. This crate never
//! populates the index; it only reads rows out of it.

pub mod memory;

use std::fmt;
use std::path::PathBuf;

pub use memory::MemoryIndex;

/// Opaque handle identifying one media item to platform facilities such as
/// thumbnail generation. Distinct from the filesystem path; the platform
/// decides what the string means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLocator(String);

impl ContentLocator {
    pub fn new(raw: impl Into<String>) -> Self {
        ContentLocator(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One raw row from the video collection. Every column is Option: the index
/// stores whatever metadata the platform managed to extract, and any column
/// can be absent for any given row.
#[derive(Debug, Clone, Default)]
pub struct VideoRow {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub duration_ms: Option<i64>,
    pub size_bytes: Option<i64>,
    pub path: Option<PathBuf>,
    pub date_added: Option<i64>,
    /// Pixel dimensions as "WxH" where the index supports the column.
    /// Informational only, never copied into output records.
    pub resolution: Option<String>,
}

/// One raw row from the audio collection.
#[derive(Debug, Clone, Default)]
pub struct AudioRow {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration_ms: Option<i64>,
    pub size_bytes: Option<i64>,
    pub path: Option<PathBuf>,
    pub date_added: Option<i64>,
    /// Platform flag separating music tracks from ringtones, notification
    /// sounds, and other non-music audio. An absent flag reads as false.
    pub is_music: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The index cannot be queried at all: read authorization is missing or
    /// was revoked after the initial grant.
    #[error("media index access denied")]
    AccessDenied,
}

/// Read access to the two fixed collections of the device media index.
///
/// Implementations return rows as stored, unordered and unfiltered. The
/// query layer applies the music-only filter and all sort orders, so platform
/// adapters never have to reproduce a particular collation.
pub trait MediaIndex {
    fn videos(&self) -> Result<Vec<VideoRow>, IndexError>;

    fn audio_tracks(&self) -> Result<Vec<AudioRow>, IndexError>;

    /// Derive the platform handle for a video, for use with facilities that
    /// do not take filesystem paths (thumbnail generation in particular).
    fn video_locator(&self, id: i64) -> ContentLocator;
}
