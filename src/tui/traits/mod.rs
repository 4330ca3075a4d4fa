//! Trait contracts for preview panels
//!
//! The App owns the section views and routes input to the focused one.
//! Panels declare what they can do through these traits instead of the App
//! knowing how every panel renders or reacts to keys.
//!
//! ```text
//!              App (global keys: q, Tab)
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   WorkHistoryView          FeaturedProjectsView
//!   (tab strip + panel)      (carousel slide)
//! ```

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
