//! On-disk thumbnail cache keyed by video identity.
//!
//! Cache entries are plain JPEG files named `thumb_<id>.jpg` inside one
//! cache directory. An entry is created lazily the first time a video's
//! thumbnail is requested and reused on every scan after that; the steady
//! state cost per video is a single existence check.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError};

use crate::index::ContentLocator;

/// Target dimensions passed to the renderer. A generation hint only: the
/// platform may return an image of any size, and it is cached as returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PreviewSize {
    fn default() -> Self {
        PreviewSize {
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("format not supported by the preview facility")]
    Unsupported,
    #[error("preview decode failed: {0}")]
    Decode(String),
    #[error("no preview facility available")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The platform's thumbnail-generation facility: produce a decoded preview
/// image for a content locator. How the platform renders it (keyframe
/// extraction, stored thumbnail track, ...) is its own business.
pub trait PreviewRenderer {
    fn render_preview(
        &self,
        locator: &ContentLocator,
        hint: PreviewSize,
    ) -> Result<DynamicImage, RenderError>;
}

/// Owns the cache directory and the renderer behind it.
#[derive(Debug)]
pub struct ThumbnailCache<R> {
    dir: PathBuf,
    size: PreviewSize,
    quality: u8,
    renderer: R,
}

impl<R: PreviewRenderer> ThumbnailCache<R> {
    pub fn new(dir: impl Into<PathBuf>, renderer: R) -> Self {
        ThumbnailCache {
            dir: dir.into(),
            size: PreviewSize::default(),
            quality: 80,
            renderer,
        }
    }

    pub fn with_settings(mut self, size: PreviewSize, quality: u8) -> Self {
        self.size = size;
        self.quality = quality;
        self
    }

    /// Build a cache from resolved configuration.
    pub fn from_config(config: &crate::config::Config, renderer: R) -> Self {
        ThumbnailCache::new(config.cache_dir.clone(), renderer)
            .with_settings(config.preview_size, config.thumbnail_quality)
    }

    /// Deterministic cache location for a video id. The file may or may not
    /// exist yet.
    pub fn entry_path(&self, id: i64) -> PathBuf {
        self.dir.join(format!("thumb_{}.jpg", id))
    }

    /// Return the cached thumbnail for `id`, generating and persisting it
    /// first if no entry exists. At most one generation attempt is made; any
    /// failure is logged and collapsed to `None` so a missing thumbnail stays
    /// a missing optional field, never a scan failure.
    ///
    /// An existing file is trusted as-is. Entries are never invalidated, so a
    /// video replaced on disk under the same index id keeps serving the old
    /// image (known limitation).
    ///
    /// Two concurrent callers racing on a cold id may both render and write;
    /// both produce equivalent bytes from the same source, so last write
    /// wins and no locking is needed.
    pub fn get_or_create(&self, id: i64, locator: &ContentLocator) -> Option<PathBuf> {
        let path = self.entry_path(id);
        if path.exists() {
            tracing::trace!("thumbnail cache hit for video {}", id);
            return Some(path);
        }

        let preview = match self.renderer.render_preview(locator, self.size) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!("no thumbnail for video {} ({}): {}", id, locator, e);
                return None;
            }
        };

        if let Err(e) = self.write_entry(&path, &preview) {
            tracing::warn!("failed to write thumbnail {}: {}", path.display(), e);
            return None;
        }
        tracing::debug!("cached thumbnail for video {} at {}", id, path.display());
        Some(path)
    }

    /// Encode to JPEG in memory, then a single open-write-close to the cache
    /// path. No temp-and-rename; see `get_or_create` on why the write race
    /// is acceptable.
    fn write_entry(&self, path: &Path, preview: &DynamicImage) -> Result<(), ImageError> {
        // JPEG carries no alpha; flatten whatever pixel format the renderer produced.
        let rgb = preview.to_rgb8();
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, self.quality);
        rgb.write_with_encoder(encoder)?;

        fs::create_dir_all(&self.dir).map_err(ImageError::IoError)?;
        fs::write(path, bytes).map_err(ImageError::IoError)?;
        Ok(())
    }
}
