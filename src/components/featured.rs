// Featured projects section - a single-slide carousel
//
// Slides are projected 1:1 from the project records in content order. The
// carousel starts on the first record and loops.

use super::carousel::{CarouselSettings, CarouselState};
use super::reveal::{MotionPreference, Reveal, RevealConfig, RevealSlot};
use super::transition::{Crossfade, Phase};
use crate::model::ProjectRecord;
use std::time::Instant;

/// DOM id of the section
pub const SECTION_ID: &str = "projects";
/// Reveal target: section heading
pub const TITLE_ID: &str = "projects-title";
/// Reveal target: slide container
pub const SLIDER_ID: &str = "projects-slider";

#[derive(Debug, Clone)]
pub struct FeaturedProjectsView {
    projects: Vec<ProjectRecord>,
    carousel: CarouselState,
    fade: Crossfade,
    motion: MotionPreference,
    reveal: RevealSlot,
}

impl FeaturedProjectsView {
    pub fn new(
        projects: Vec<ProjectRecord>,
        motion: MotionPreference,
        settings: CarouselSettings,
    ) -> Self {
        let fade = Crossfade::new(settings.speed);
        Self {
            carousel: CarouselState::new(projects.len(), settings),
            projects,
            fade,
            motion,
            reveal: RevealSlot::new(),
        }
    }

    /// Register title + slider reveals; once per instance, never under reduced motion
    pub fn mount(&mut self, config: &RevealConfig, revealer: &mut dyn Reveal) -> bool {
        let title = format!("#{TITLE_ID}");
        let slider = format!("#{SLIDER_ID}");
        self.reveal.mount(
            self.motion,
            &[title.as_str(), slider.as_str()],
            config,
            revealer,
        )
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    /// Next-slide control
    pub fn advance(&mut self, now: Instant) -> bool {
        let previous = self.carousel.current();
        let changed = self.carousel.advance();
        self.after_move(previous, changed, now);
        changed
    }

    /// Previous-slide control
    pub fn retreat(&mut self, now: Instant) -> bool {
        let previous = self.carousel.current();
        let changed = self.carousel.retreat();
        self.after_move(previous, changed, now);
        changed
    }

    /// Dot control: jump to slide `index`
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        let previous = self.carousel.current();
        let changed = self.carousel.go_to(index);
        self.after_move(previous, changed, now);
        changed
    }

    pub fn slide_phase(&self, index: usize, now: Instant) -> Phase {
        self.fade.phase(index, self.carousel.current(), now)
    }

    fn after_move(&mut self, previous: Option<usize>, changed: bool, now: Instant) {
        if !changed {
            return;
        }
        if let Some(previous) = previous {
            if self.carousel.settings().fade {
                self.fade.begin(previous, now);
            }
        }
        tracing::debug!("Carousel now on slide {:?}", self.carousel.current());
    }
}
