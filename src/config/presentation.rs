//! Section configuration: content patterns, carousel, tabs, reveal
//!
//! Each section follows the same two-layer shape as the rest of the config:
//! a `File*` struct of optionals straight from TOML, and a resolved struct
//! built with `from_file()`.

use crate::components::{CarouselSettings, RevealConfig};
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Content sections
// ─────────────────────────────────────────────────────────────────────────────

/// Which content files feed which section (regex over root-relative paths)
#[derive(Debug, Clone)]
pub struct SectionsConfig {
    pub featured_pattern: String,
    pub jobs_pattern: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            featured_pattern: "^featured/".to_string(),
            jobs_pattern: "^jobs/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSections {
    pub featured_pattern: Option<String>,
    pub jobs_pattern: Option<String>,
}

impl SectionsConfig {
    pub fn from_file(file: Option<FileSections>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            featured_pattern: file.featured_pattern.unwrap_or(defaults.featured_pattern),
            jobs_pattern: file.jobs_pattern.unwrap_or(defaults.jobs_pattern),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Carousel
// ─────────────────────────────────────────────────────────────────────────────

/// Featured projects carousel
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub speed_ms: u64,
    pub infinite: bool,
    pub autoplay: bool,
    pub dots: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed_ms: 500,
            infinite: true,
            autoplay: false,
            dots: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileCarousel {
    pub speed_ms: Option<u64>,
    pub infinite: Option<bool>,
    pub autoplay: Option<bool>,
    pub dots: Option<bool>,
}

impl CarouselConfig {
    pub fn from_file(file: Option<FileCarousel>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            speed_ms: file.speed_ms.unwrap_or(defaults.speed_ms),
            infinite: file.infinite.unwrap_or(defaults.infinite),
            autoplay: file.autoplay.unwrap_or(defaults.autoplay),
            dots: file.dots.unwrap_or(defaults.dots),
        }
    }

    /// Carousel settings; single-slide fade is fixed by the section design
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            dots: self.dots,
            infinite: self.infinite,
            speed: Duration::from_millis(self.speed_ms),
            autoplay: self.autoplay,
            ..CarouselSettings::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Work history tab strip
#[derive(Debug, Clone)]
pub struct TabsConfig {
    /// Panel crossfade duration
    pub fade_ms: u64,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self { fade_ms: 250 }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTabs {
    pub fade_ms: Option<u64>,
}

impl TabsConfig {
    pub fn from_file(file: Option<FileTabs>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            fade_ms: file.fade_ms.unwrap_or(Self::default().fade_ms),
        }
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reveal
// ─────────────────────────────────────────────────────────────────────────────

/// Scroll reveal tuning (everything else uses the stock reveal config)
#[derive(Debug, Clone)]
pub struct RevealSettings {
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub distance: String,
    pub view_factor: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        let stock = RevealConfig::default();
        Self {
            delay_ms: stock.delay,
            duration_ms: stock.duration,
            distance: stock.distance,
            view_factor: stock.view_factor,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileReveal {
    pub delay_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub distance: Option<String>,
    pub view_factor: Option<f32>,
}

impl RevealSettings {
    pub fn from_file(file: Option<FileReveal>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            delay_ms: file.delay_ms.unwrap_or(defaults.delay_ms),
            duration_ms: file.duration_ms.unwrap_or(defaults.duration_ms),
            distance: file.distance.unwrap_or(defaults.distance),
            view_factor: file.view_factor.unwrap_or(defaults.view_factor),
        }
    }

    pub fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            delay: self.delay_ms,
            duration: self.duration_ms,
            distance: self.distance.clone(),
            view_factor: self.view_factor,
            ..RevealConfig::default()
        }
    }
}
