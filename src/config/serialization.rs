//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Markdown content root (FOLIO_CONTENT_DIR overrides)
content_dir = "{content_dir}"

# Build output directory (FOLIO_OUTPUT_DIR overrides)
output_dir = "{output_dir}"

# Page title
title = "{title}"

# Motion preference: "no-preference" or "reduce" (FOLIO_REDUCED_MOTION=1 overrides)
# "reduce" skips every scroll-reveal registration
motion = "{motion}"

# Which content files feed which section (regex over paths relative to content_dir)
[sections]
featured_pattern = "{featured_pattern}"
jobs_pattern = "{jobs_pattern}"

# Featured projects carousel
[carousel]
speed_ms = {speed_ms}
infinite = {infinite}
autoplay = {autoplay}
dots = {dots}

# Work history tabs
[tabs]
fade_ms = {fade_ms}

# Scroll reveal
[reveal]
delay_ms = {delay_ms}
duration_ms = {duration_ms}
distance = "{distance}"
view_factor = {view_factor:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to preview buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            content_dir = toml_path(&self.content_dir),
            output_dir = toml_path(&self.output_dir),
            title = escape(&self.title),
            motion = self.motion.as_str(),
            featured_pattern = escape(&self.sections.featured_pattern),
            jobs_pattern = escape(&self.sections.jobs_pattern),
            speed_ms = self.carousel.speed_ms,
            infinite = self.carousel.infinite,
            autoplay = self.carousel.autoplay,
            dots = self.carousel.dots,
            fade_ms = self.tabs.fade_ms,
            delay_ms = self.reveal.delay_ms,
            duration_ms = self.reveal.duration_ms,
            distance = escape(&self.reveal.distance),
            view_factor = self.reveal.view_factor,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_path(&self.logging.file_dir),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn toml_path(path: &std::path::Path) -> String {
    escape(&path.display().to_string())
}
