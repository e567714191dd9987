#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use image::{DynamicImage, Rgb, RgbImage};

use mediadex::access::AccessPolicy;
use mediadex::index::{AudioRow, ContentLocator, VideoRow};
use mediadex::thumbs::{PreviewRenderer, PreviewSize, RenderError};

static LOG: Once = Once::new();

pub fn init_logging() {
    LOG.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    });
}

// ── renderer fakes ───────────────────────────────────────────────────────────

/// Renderer that yields a solid-color image of a fixed size (ignoring the
/// hint, as a platform is allowed to) and records every call.
pub struct StubRenderer {
    width: u32,
    height: u32,
    fail: bool,
    pub calls: Arc<AtomicUsize>,
    pub seen_hints: Arc<Mutex<Vec<PreviewSize>>>,
}

impl StubRenderer {
    pub fn solid(width: u32, height: u32) -> Self {
        StubRenderer {
            width,
            height,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
            seen_hints: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        let mut stub = Self::solid(0, 0);
        stub.fail = true;
        stub
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PreviewRenderer for StubRenderer {
    fn render_preview(
        &self,
        _locator: &ContentLocator,
        hint: PreviewSize,
    ) -> Result<DynamicImage, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_hints.lock().unwrap().push(hint);
        if self.fail {
            return Err(RenderError::Unsupported);
        }
        Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            self.width,
            self.height,
            Rgb([40, 90, 160]),
        )))
    }
}

// ── access policy fakes ──────────────────────────────────────────────────────

/// Policy that refuses access and records whether the scan asked the host to
/// start a permission request.
#[derive(Default)]
pub struct Denied {
    pub requested: Arc<AtomicBool>,
}

impl AccessPolicy for Denied {
    fn media_read_granted(&self) -> bool {
        false
    }

    fn request_media_read(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}

// ── row builders ─────────────────────────────────────────────────────────────

pub fn video_row(id: i64, title: &str, duration_ms: i64, date_added: i64) -> VideoRow {
    VideoRow {
        id: Some(id),
        display_name: Some(title.to_string()),
        duration_ms: Some(duration_ms),
        size_bytes: Some(1_000_000),
        path: Some(PathBuf::from(format!("/media/videos/{}", title))),
        date_added: Some(date_added),
        resolution: None,
    }
}

pub fn music_row(id: i64, title: &str) -> AudioRow {
    AudioRow {
        id: Some(id),
        title: Some(title.to_string()),
        artist: Some("Artist".to_string()),
        album: Some("Album".to_string()),
        duration_ms: Some(200_000),
        size_bytes: Some(5_000_000),
        path: Some(PathBuf::from(format!("/media/music/{}.mp3", title))),
        date_added: Some(1),
        is_music: true,
    }
}
