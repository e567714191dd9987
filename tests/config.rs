use std::io::Write;
use std::path::PathBuf;

use mediadex::config::{find_config_file, load_config, Config, ConfigError, FileConfig, Overrides};
use mediadex::thumbs::PreviewSize;

fn no_overrides() -> Overrides {
    Overrides::default()
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &no_overrides());
    assert_eq!(config.thumbnail_quality, 80);
    assert_eq!(
        config.preview_size,
        PreviewSize {
            width: 640,
            height: 480
        }
    );
    assert!(
        config.cache_dir.ends_with("mediadex/thumbs"),
        "expected default cache dir under mediadex/thumbs, got: {}",
        config.cache_dir.display()
    );
}

#[test]
fn test_file_overrides_default() {
    let file = FileConfig {
        cache_dir: Some(PathBuf::from("/var/cache/player")),
        thumbnail_quality: Some(60),
        preview_width: None,
        preview_height: None,
    };
    let config = Config::resolve(Some(file), &no_overrides());
    assert_eq!(config.cache_dir, PathBuf::from("/var/cache/player"));
    assert_eq!(config.thumbnail_quality, 60);
}

#[test]
fn test_override_beats_file() {
    let file = FileConfig {
        cache_dir: Some(PathBuf::from("/var/cache/player")),
        thumbnail_quality: Some(60),
        preview_width: None,
        preview_height: None,
    };
    let overrides = Overrides {
        cache_dir: Some(PathBuf::from("/tmp/thumbs")),
        thumbnail_quality: Some(95),
    };
    let config = Config::resolve(Some(file), &overrides);
    assert_eq!(config.cache_dir, PathBuf::from("/tmp/thumbs"));
    assert_eq!(config.thumbnail_quality, 95);
}

#[test]
fn test_preview_size_from_file() {
    let file = FileConfig {
        cache_dir: None,
        thumbnail_quality: None,
        preview_width: Some(320),
        preview_height: Some(240),
    };
    let config = Config::resolve(Some(file), &no_overrides());
    assert_eq!(
        config.preview_size,
        PreviewSize {
            width: 320,
            height: 240
        }
    );
}

#[test]
fn test_toml_parse() {
    let toml_str = "cache_dir = \"/data/thumbs\"\nthumbnail_quality = 70\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.cache_dir, Some(PathBuf::from("/data/thumbs")));
    assert_eq!(parsed.thumbnail_quality, Some(70));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    // Future keys must not break parsing
    let toml_str = "thumbnail_quality = 70\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_load_config_missing_file_is_io_error() {
    let err = load_config(std::path::Path::new("/nonexistent/mediadex.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_config_bad_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "thumbnail_quality = \"not a number\"").unwrap();
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_find_config_file_explicit_wins() {
    let explicit = PathBuf::from("/etc/mediadex/custom.toml");
    assert_eq!(find_config_file(Some(explicit.as_path())), Some(explicit));
}
