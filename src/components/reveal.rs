//! Scroll-reveal registration
//!
//! Sections ask for a one-time reveal animation when they scroll into view.
//! This module only *registers* the request; the animation itself belongs to
//! whatever implements [`Reveal`] (the page script in a built site, a fade-in
//! in the terminal preview).
//!
//! # Reduced motion
//!
//! Registering an animation for a user who asked for reduced motion is an
//! accessibility failure, not a cosmetic one. The preference is handed to
//! each section at construction and [`RevealSlot::mount`] skips registration
//! entirely when it is set.
//!
//! Registrations are never torn down: a page mounts its sections once.

use serde::Serialize;

/// Platform motion preference, resolved once before mounting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

/// Config spelling ("reduce" / "no-preference"); anything unknown means no preference
impl From<&str> for MotionPreference {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "reduce" | "reduced" | "true" | "1" => Self::Reduce,
            _ => Self::NoPreference,
        }
    }
}

impl MotionPreference {

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPreference => "no-preference",
            Self::Reduce => "reduce",
        }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduce
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rotate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ViewOffset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Reveal animation parameters, serialized in ScrollReveal's option shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    pub origin: String,
    pub distance: String,
    /// Milliseconds
    pub duration: u64,
    /// Milliseconds
    pub delay: u64,
    pub rotate: Rotate,
    pub opacity: f32,
    pub scale: f32,
    pub easing: String,
    pub mobile: bool,
    pub reset: bool,
    pub use_delay: String,
    pub view_factor: f32,
    pub view_offset: ViewOffset,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            origin: "bottom".to_string(),
            distance: "20px".to_string(),
            duration: 500,
            delay: 200,
            rotate: Rotate::default(),
            opacity: 0.0,
            scale: 1.0,
            easing: "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            mobile: true,
            reset: false,
            use_delay: "always".to_string(),
            view_factor: 0.25,
            view_offset: ViewOffset::default(),
        }
    }
}

/// Something that can schedule a reveal for an element
///
/// Fire-and-forget: nothing is returned to the caller.
pub trait Reveal {
    /// `target` is a CSS selector for the element (`#jobs`)
    fn reveal(&mut self, target: &str, config: &RevealConfig);
}

/// Per-section registration guard: at most one registration per instance
#[derive(Debug, Clone, Default)]
pub struct RevealSlot {
    registered: bool,
}

impl RevealSlot {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Register every target once, unless motion is reduced
    ///
    /// Returns whether anything was registered by this call.
    pub fn mount(
        &mut self,
        motion: MotionPreference,
        targets: &[&str],
        config: &RevealConfig,
        revealer: &mut dyn Reveal,
    ) -> bool {
        if motion.is_reduced() || self.registered {
            return false;
        }
        for target in targets {
            revealer.reveal(target, config);
        }
        self.registered = true;
        tracing::debug!("Registered reveal for {:?}", targets);
        true
    }
}

/// Collects registrations and renders them as page script
#[derive(Debug, Default)]
pub struct ScriptReveal {
    registrations: Vec<(String, RevealConfig)>,
}

impl ScriptReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[(String, RevealConfig)] {
        &self.registrations
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// One `sr.reveal(...)` call per registration
    ///
    /// The emitted script re-checks `prefers-reduced-motion` in the browser
    /// before touching ScrollReveal, so a visitor's own setting still wins
    /// over a build made without the flag.
    pub fn to_script(&self) -> anyhow::Result<String> {
        let mut out = String::from(
            "(function () {\n  if (window.matchMedia('(prefers-reduced-motion: reduce)').matches) return;\n  if (typeof ScrollReveal === 'undefined') return;\n  var sr = ScrollReveal();\n",
        );
        for (target, config) in &self.registrations {
            let selector = serde_json::to_string(target)?;
            // Keep user-supplied strings from closing the inline <script>
            let options = serde_json::to_string(config)?.replace("</", "<\\/");
            out.push_str(&format!(
                "  sr.reveal(document.querySelector({selector}), {options});\n"
            ));
        }
        out.push_str("})();\n");
        Ok(out)
    }
}

impl Reveal for ScriptReveal {
    fn reveal(&mut self, target: &str, config: &RevealConfig) {
        self.registrations.push((target.to_string(), config.clone()));
    }
}
