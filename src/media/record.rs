use serde::Serialize;
use std::path::PathBuf;

/// One indexed video, normalized for listing. Serializes to the wire shape
/// consumed by the host UI: every key always present, optionals as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    /// Index-assigned identity. Unique among videos; video and audio ids are
    /// independent namespaces.
    pub id: i64,
    /// Display name as stored by the index. None when the source omits it.
    pub title: Option<String>,
    /// Whole seconds, floored from the source's millisecond duration.
    #[serde(rename = "duration")]
    pub duration_secs: u64,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Absolute location at scan time. Goes stale if the file later moves.
    pub path: PathBuf,
    /// Source-defined timestamp, used only as an ordering key.
    #[serde(rename = "dateAdded")]
    pub date_added: i64,
    /// Cached preview image, or None when none could be produced.
    pub thumbnail: Option<PathBuf>,
}

/// One indexed music track, normalized for listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioRecord {
    pub id: i64,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    #[serde(rename = "duration")]
    pub duration_secs: u64,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    pub path: PathBuf,
    #[serde(rename = "dateAdded")]
    pub date_added: i64,
}
