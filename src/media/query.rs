//! Metadata query layer: turn raw index rows into ordered record lists,
//! tolerating bad rows instead of failing the whole scan.

use std::cmp::Reverse;
use std::fmt;
use std::path::PathBuf;

use crate::index::{AudioRow, MediaIndex, VideoRow};
use crate::media::record::{AudioRecord, VideoRecord};
use crate::media::ScanError;
use crate::thumbs::{PreviewRenderer, ThumbnailCache};

/// Why a row was dropped. Dropping is an expected outcome, not an error;
/// it is logged per row and the scan continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    MissingId,
    MissingPath,
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSkip::MissingId => f.write_str("no id column"),
            RowSkip::MissingPath => f.write_str("no path column"),
        }
    }
}

/// Floor a source millisecond duration to whole seconds. Absent and negative
/// values both normalize to 0, matching how the index reports null numeric
/// columns.
fn duration_secs(duration_ms: Option<i64>) -> u64 {
    duration_ms.unwrap_or(0).max(0) as u64 / 1000
}

fn byte_size(size: Option<i64>) -> u64 {
    size.unwrap_or(0).max(0) as u64
}

fn required_id(id: Option<i64>) -> Result<i64, RowSkip> {
    id.ok_or(RowSkip::MissingId)
}

fn required_path(path: Option<PathBuf>) -> Result<PathBuf, RowSkip> {
    path.ok_or(RowSkip::MissingPath)
}

fn video_record(row: VideoRow) -> Result<VideoRecord, RowSkip> {
    Ok(VideoRecord {
        id: required_id(row.id)?,
        title: row.display_name,
        duration_secs: duration_secs(row.duration_ms),
        size_bytes: byte_size(row.size_bytes),
        path: required_path(row.path)?,
        date_added: row.date_added.unwrap_or(0),
        thumbnail: None,
    })
}

fn audio_record(row: AudioRow) -> Result<AudioRecord, RowSkip> {
    Ok(AudioRecord {
        id: required_id(row.id)?,
        title: row.title,
        artist: row.artist,
        album: row.album,
        duration_secs: duration_secs(row.duration_ms),
        size_bytes: byte_size(row.size_bytes),
        path: required_path(row.path)?,
        date_added: row.date_added.unwrap_or(0),
    })
}

/// All videos, most recently added first, thumbnails resolved through the
/// cache in final list order. Rows without an id or path are dropped with a
/// warning.
pub fn query_videos<I, R>(
    index: &I,
    thumbs: &ThumbnailCache<R>,
) -> Result<Vec<VideoRecord>, ScanError>
where
    I: MediaIndex,
    R: PreviewRenderer,
{
    let rows = index.videos()?;
    let total = rows.len();

    let mut records: Vec<VideoRecord> = Vec::with_capacity(total);
    for row in rows {
        match video_record(row) {
            Ok(record) => records.push(record),
            Err(skip) => tracing::warn!("dropping video row: {}", skip),
        }
    }

    // Stable sort: equal timestamps keep their index order.
    records.sort_by_key(|r| Reverse(r.date_added));

    for record in &mut records {
        let locator = index.video_locator(record.id);
        record.thumbnail = thumbs.get_or_create(record.id, &locator);
    }

    tracing::debug!("video query: {} of {} rows listed", records.len(), total);
    Ok(records)
}

/// Music tracks only, ordered by title ascending (byte-order, case
/// sensitive). Non-music audio (ringtones, notification sounds) never
/// appears in the result.
pub fn query_audio<I: MediaIndex>(index: &I) -> Result<Vec<AudioRecord>, ScanError> {
    let rows = index.audio_tracks()?;
    let total = rows.len();

    let mut records: Vec<AudioRecord> = Vec::new();
    for row in rows.into_iter().filter(|r| r.is_music) {
        match audio_record(row) {
            Ok(record) => records.push(record),
            Err(skip) => tracing::warn!("dropping audio row: {}", skip),
        }
    }

    // Untitled tracks sort first (None < Some); stable among equal titles.
    records.sort_by(|a, b| a.title.cmp(&b.title));

    tracing::debug!("audio query: {} of {} rows listed", records.len(), total);
    Ok(records)
}
