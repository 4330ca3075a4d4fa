//! Interactive trait for panels that handle keyboard input

use super::Component;
use crossterm::event::KeyEvent;
use std::time::Instant;

/// Result of handling a key event
///
/// Tells the App whether the panel consumed the event or if it should
/// bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for panels that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global: q, Esc, Tab)
///    │ if not handled
///    ▼
/// Focused panel (Interactive::handle_key)
/// ```
///
/// A key the panel understands is `Handled::Yes` even when it changes
/// nothing (reselecting the active tab, stepping past a clamped edge).
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> &'static str;
}
