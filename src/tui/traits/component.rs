//! Core component trait
//!
//! Every preview panel implements `Component`: an identity plus a pure
//! render into a frame area.

use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Identifier for a focusable section of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentId {
    /// Featured projects carousel
    #[default]
    Projects,
    /// Work history tabs
    Jobs,
}

impl ComponentId {
    /// Cycle focus (Tab / Shift+Tab both toggle between the two sections)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Projects => Self::Jobs,
            Self::Jobs => Self::Projects,
        }
    }

    /// Reveal target that gates this section's first appearance
    pub fn reveal_target(self) -> &'static str {
        match self {
            Self::Projects => "#projects-slider",
            Self::Jobs => "#jobs",
        }
    }
}

/// Immutable context passed to components during rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Which section currently has focus
    pub focus: ComponentId,

    /// Frame timestamp; fades are evaluated against it
    pub now: Instant,

    /// Reveal progress of the section being drawn, 0.0..=1.0
    pub reveal: f32,
}

impl RenderContext {
    pub fn new(focus: ComponentId, now: Instant, reveal: f32) -> Self {
        Self { focus, now, reveal }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Whether the section is still fading in
    pub fn is_revealing(&self) -> bool {
        self.reveal < 1.0
    }
}

/// Base trait for all preview panels
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
