//! Configuration tests
//!
//! The template written by `to_toml()` must parse back into `FileConfig` and
//! resolve to the same values; otherwise a freshly generated config file
//! would change the build.

use super::observability::LogRotation;
use super::*;
use std::collections::HashMap;
use std::time::Duration;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), &no_env);
    assert_eq!(resolved.content_dir, config.content_dir);
    assert_eq!(resolved.output_dir, config.output_dir);
    assert_eq!(resolved.motion, MotionPreference::NoPreference);
    assert_eq!(resolved.carousel.speed_ms, 500);
    assert_eq!(resolved.tabs.fade_ms, 250);
    assert_eq!(resolved.reveal.view_factor, 0.25);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.title = "Jo \"JD\" Doe".to_string();
    config.motion = MotionPreference::Reduce;
    config.sections.jobs_pattern = r"^work/\d+".to_string();
    config.carousel.infinite = false;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(file, &no_env);

    assert_eq!(resolved.title, "Jo \"JD\" Doe");
    assert_eq!(resolved.motion, MotionPreference::Reduce);
    assert_eq!(resolved.sections.jobs_pattern, r"^work/\d+");
    assert!(!resolved.carousel.infinite);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
content_dir = "from-file"
output_dir = "out-file"
motion = "no-preference"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("FOLIO_CONTENT_DIR", "from-env"),
        ("FOLIO_REDUCED_MOTION", "1"),
    ]
    .into_iter()
    .collect();
    let lookup = |key: &str| env.get(key).map(|v| v.to_string());

    let config = Config::resolve(file, &lookup);
    assert_eq!(config.content_dir, PathBuf::from("from-env"));
    assert_eq!(config.output_dir, PathBuf::from("out-file"));
    assert_eq!(config.motion, MotionPreference::Reduce);
}

#[test]
fn test_env_can_clear_reduced_motion() {
    let file: FileConfig = toml::from_str("motion = \"reduce\"").unwrap();
    let config = Config::resolve(file, &|key| {
        (key == "FOLIO_REDUCED_MOTION").then(|| "false".to_string())
    });
    assert_eq!(config.motion, MotionPreference::NoPreference);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[carousel]
speed_ms = 800

[tabs]
fade_ms = 0
"#,
    )
    .unwrap();
    let config = Config::resolve(file, &no_env);

    let settings = config.carousel.settings();
    assert_eq!(settings.speed, Duration::from_millis(800));
    assert!(settings.infinite);
    assert!(settings.fade);
    assert_eq!(config.tabs.fade(), Duration::ZERO);
    assert_eq!(config.sections.featured_pattern, "^featured/");
}

#[test]
fn test_reveal_settings_feed_reveal_config() {
    let file: FileConfig = toml::from_str("[reveal]\ndelay_ms = 50\ndistance = \"40px\"").unwrap();
    let reveal = Config::resolve(file, &no_env).reveal.reveal_config();
    assert_eq!(reveal.delay, 50);
    assert_eq!(reveal.distance, "40px");
    assert_eq!(reveal.duration, 500);
    assert_eq!(reveal.origin, "bottom");
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::from("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::from("NEVER"), LogRotation::Never);
}

#[test]
fn test_file_appender_creates_log_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let logging = LoggingConfig {
        file_enabled: true,
        file_dir: dir.path().join("nested").join("logs"),
        file_rotation: LogRotation::from("hourly"),
        ..LoggingConfig::default()
    };
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
    assert!(logging.file_appender().is_ok());
    assert!(logging.file_dir.is_dir());
}
