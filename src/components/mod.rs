//! Section components and the state machines behind them
//!
//! ```text
//!   ContentQuery ──► JobRecord[] ─────► WorkHistoryView ──┐
//!                └─► ProjectRecord[] ─► FeaturedProjectsView ──┤
//!                                                        ▼
//!                                            Reveal (register once)
//! ```
//!
//! Views own their state; renderers (`site::html`, `tui`) only read it.

pub mod carousel;
pub mod featured;
pub mod reveal;
pub mod tabs;
pub mod transition;
pub mod work_history;

pub use carousel::CarouselSettings;
pub use featured::FeaturedProjectsView;
pub use reveal::{MotionPreference, Reveal, RevealConfig, ScriptReveal};
pub use tabs::TabCommand;
pub use transition::Phase;
pub use work_history::WorkHistoryView;
