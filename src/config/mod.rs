//! Configuration for the site builder and preview
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::components::MotionPreference;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod presentation;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LoggingConfig};
pub use presentation::{
    CarouselConfig, FileCarousel, FileReveal, FileSections, FileTabs, RevealSettings,
    SectionsConfig, TabsConfig,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the markdown content tree
    pub content_dir: PathBuf,

    /// Where the built site is written
    pub output_dir: PathBuf,

    /// Page title
    pub title: String,

    /// Motion preference handed to every section at construction
    pub motion: MotionPreference,

    /// Content path patterns per section
    pub sections: SectionsConfig,

    /// Featured projects carousel
    pub carousel: CarouselConfig,

    /// Work history tabs
    pub tabs: TabsConfig,

    /// Scroll reveal tuning
    pub reveal: RevealSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            output_dir: PathBuf::from("./public"),
            title: "Portfolio".to_string(),
            motion: MotionPreference::NoPreference,
            sections: SectionsConfig::default(),
            carousel: CarouselConfig::default(),
            tabs: TabsConfig::default(),
            reveal: RevealSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub content_dir: Option<String>,
    pub output_dir: Option<String>,
    pub title: Option<String>,
    pub motion: Option<String>,

    /// Optional [sections] section
    pub sections: Option<FileSections>,

    /// Optional [carousel] section
    pub carousel: Option<FileCarousel>,

    /// Optional [tabs] section
    pub tabs: Option<FileTabs>,

    /// Optional [reveal] section
    pub reveal: Option<FileReveal>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parsed config file, or an empty one when there is no file
    ///
    /// A file that exists but cannot be read or parsed is fatal: building
    /// with defaults would produce a different site than the one configured.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FileConfig::default(),
            Err(e) => config_fatal(&path, "Cannot read configuration file", &e, false),
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            config_fatal(&path, "Failed to parse configuration file", &e, true)
        })
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), &|key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: &dyn Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Content directory: env > file > default
        let content_dir = env("FOLIO_CONTENT_DIR")
            .or(file.content_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.content_dir);

        // Output directory: env > file > default
        let output_dir = env("FOLIO_OUTPUT_DIR")
            .or(file.output_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let title = file.title.unwrap_or(defaults.title);

        // Motion: env flag > file > default (no preference)
        let motion = match env("FOLIO_REDUCED_MOTION") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => MotionPreference::Reduce,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => {
                MotionPreference::NoPreference
            }
            _ => file
                .motion
                .map(|m| MotionPreference::from(m.as_str()))
                .unwrap_or(defaults.motion),
        };

        Self {
            content_dir,
            output_dir,
            title,
            motion,
            sections: SectionsConfig::from_file(file.sections),
            carousel: CarouselConfig::from_file(file.carousel),
            tabs: TabsConfig::from_file(file.tabs),
            reveal: RevealSettings::from_file(file.reveal),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}

/// Print a boxed config error and exit
fn config_fatal(path: &Path, headline: &str, err: &dyn std::fmt::Display, hints: bool) -> ! {
    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║  CONFIG ERROR - {headline:<45}║");
    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
    eprintln!("  File: {}\n", path.display());
    eprintln!("  Error: {}\n", err);
    if hints {
        eprintln!("  Check for missing quotes, true/false booleans and section typos.");
        eprintln!("  To start over, run `folio config --reset`.\n");
    }
    std::process::exit(1);
}
