// Crossfade bookkeeping shared by tab panels and carousel slides
//
// Only the outgoing side needs tracking: the incoming element is the active
// one and is interactive immediately. A new fade replaces the current one, so
// a fast second selection truncates the first fade instead of queueing.

use std::time::{Duration, Instant};

/// Display phase of one panel/slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Visible and interactive
    Active,
    /// Leaving; visible for the cosmetic overlap but not interactive
    FadingOut {
        /// 0.0 at start of fade, approaching 1.0 at the end
        progress: f32,
    },
    /// Mounted but hidden
    Hidden,
}

impl Phase {
    pub fn is_interactive(self) -> bool {
        matches!(self, Phase::Active)
    }
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: usize,
    started: Instant,
}

/// Fixed-duration crossfade
#[derive(Debug, Clone)]
pub struct Crossfade {
    duration: Duration,
    outgoing: Option<Fade>,
}

impl Crossfade {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            outgoing: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start fading out `from`; replaces any fade in flight
    pub fn begin(&mut self, from: usize, now: Instant) {
        self.outgoing = Some(Fade { from, started: now });
    }

    /// Index and progress of the element currently fading out
    pub fn outgoing(&self, now: Instant) -> Option<(usize, f32)> {
        let fade = self.outgoing?;
        let elapsed = now.saturating_duration_since(fade.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return None;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some((fade.from, progress))
    }

    /// Phase of element `index` given which one is active
    pub fn phase(&self, index: usize, active: Option<usize>, now: Instant) -> Phase {
        if active == Some(index) {
            return Phase::Active;
        }
        match self.outgoing(now) {
            Some((from, progress)) if from == index => Phase::FadingOut { progress },
            _ => Phase::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_expires_after_duration() {
        let t0 = Instant::now();
        let mut fade = Crossfade::new(Duration::from_millis(250));
        fade.begin(0, t0);

        let (from, progress) = fade.outgoing(t0 + Duration::from_millis(125)).unwrap();
        assert_eq!(from, 0);
        assert!((progress - 0.5).abs() < 0.01);

        assert!(fade.outgoing(t0 + Duration::from_millis(250)).is_none());
    }

    #[test]
    fn test_outgoing_is_not_interactive() {
        let t0 = Instant::now();
        let mut fade = Crossfade::new(Duration::from_millis(250));
        fade.begin(0, t0);

        let now = t0 + Duration::from_millis(10);
        assert!(!fade.phase(0, Some(1), now).is_interactive());
        assert!(fade.phase(1, Some(1), now).is_interactive());
        assert_eq!(fade.phase(2, Some(1), now), Phase::Hidden);
    }

    #[test]
    fn test_new_fade_supersedes_old() {
        let t0 = Instant::now();
        let mut fade = Crossfade::new(Duration::from_millis(250));
        fade.begin(0, t0);
        fade.begin(1, t0 + Duration::from_millis(50));

        let now = t0 + Duration::from_millis(60);
        assert_eq!(fade.phase(0, Some(2), now), Phase::Hidden);
        assert!(matches!(
            fade.phase(1, Some(2), now),
            Phase::FadingOut { .. }
        ));
    }

    #[test]
    fn test_zero_duration_never_fades() {
        let t0 = Instant::now();
        let mut fade = Crossfade::new(Duration::ZERO);
        fade.begin(0, t0);
        assert!(fade.outgoing(t0).is_none());
    }
}
