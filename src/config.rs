use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::thumbs::PreviewSize;

const DEFAULT_JPEG_QUALITY: u8 = 80;
const DEFAULT_PREVIEW_WIDTH: u32 = 640;
const DEFAULT_PREVIEW_HEIGHT: u32 = 480;

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mediadex")
        .join("thumbs")
}

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub cache_dir: Option<PathBuf>,
    pub thumbnail_quality: Option<u8>,
    pub preview_width: Option<u32>,
    pub preview_height: Option<u32>,
}

/// Values the embedding application sets programmatically. Takes precedence
/// over the config file, which takes precedence over built-in defaults.
#[derive(Default, Debug, Clone)]
pub struct Overrides {
    pub cache_dir: Option<PathBuf>,
    pub thumbnail_quality: Option<u8>,
}

#[derive(Debug)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub thumbnail_quality: u8,
    pub preview_size: PreviewSize,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, overrides: &Overrides) -> Self {
        let file = file.unwrap_or_default();
        Config {
            cache_dir: overrides
                .cache_dir
                .clone()
                .or(file.cache_dir)
                .unwrap_or_else(default_cache_dir),
            thumbnail_quality: overrides
                .thumbnail_quality
                .or(file.thumbnail_quality)
                .unwrap_or(DEFAULT_JPEG_QUALITY),
            preview_size: PreviewSize {
                width: file.preview_width.unwrap_or(DEFAULT_PREVIEW_WIDTH),
                height: file.preview_height.unwrap_or(DEFAULT_PREVIEW_HEIGHT),
            },
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("mediadex.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("mediadex").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
