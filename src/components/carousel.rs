// Single-slide carousel position
//
// One slide visible at a time. With `infinite` on (the default) advancing
// past the last slide lands on the first and retreating from the first lands
// on the last; there is no terminal state.

use std::time::Duration;

/// Carousel behaviour knobs
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Page indicator dots under the slides
    pub dots: bool,
    /// Crossfade between slides instead of sliding
    pub fade: bool,
    pub infinite: bool,
    /// Transition duration
    pub speed: Duration,
    pub slides_to_scroll: usize,
    /// Advance on a timer; off unless configured
    pub autoplay: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            dots: false,
            fade: true,
            infinite: true,
            speed: Duration::from_millis(500),
            slides_to_scroll: 1,
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    len: usize,
    current: usize,
    settings: CarouselSettings,
}

impl CarouselState {
    pub fn new(len: usize, settings: CarouselSettings) -> Self {
        Self {
            len,
            current: 0,
            settings,
        }
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Visible slide, `None` for an empty carousel
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Next slide(s); returns whether the visible slide changed
    pub fn advance(&mut self) -> bool {
        self.step(self.settings.slides_to_scroll.max(1) as isize)
    }

    /// Previous slide(s); returns whether the visible slide changed
    pub fn retreat(&mut self) -> bool {
        self.step(-(self.settings.slides_to_scroll.max(1) as isize))
    }

    /// Jump straight to a slide
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    fn step(&mut self, delta: isize) -> bool {
        if self.len == 0 {
            return false;
        }
        let len = self.len as isize;
        let target = self.current as isize + delta;
        let next = if self.settings.infinite {
            target.rem_euclid(len)
        } else {
            target.clamp(0, len - 1)
        } as usize;

        let changed = next != self.current;
        self.current = next;
        changed
    }
}
