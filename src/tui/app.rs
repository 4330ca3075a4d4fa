// Preview application state
//
// Owns both section views for the lifetime of the preview. Input is routed
// to the focused section; a tick drives carousel autoplay. Reveal timing is
// recorded once at mount and read back every frame.

use super::traits::{ComponentId, Handled, Interactive};
use crate::components::{
    FeaturedProjectsView, MotionPreference, Reveal, RevealConfig, WorkHistoryView,
};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::{JobRecord, ProjectRecord};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Time between automatic slide advances when autoplay is on
const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy)]
struct RevealTiming {
    delay: Duration,
    duration: Duration,
}

/// Reveal driver for the terminal: each target fades in once after mount
///
/// Targets never registered (reduced motion) report full visibility.
#[derive(Debug)]
pub struct TerminalReveal {
    mounted_at: Instant,
    targets: HashMap<String, RevealTiming>,
}

impl TerminalReveal {
    pub fn new(mounted_at: Instant) -> Self {
        Self {
            mounted_at,
            targets: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn is_registered(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    /// 0.0 before the reveal starts, 1.0 once it has finished
    pub fn progress(&self, target: &str, now: Instant) -> f32 {
        let Some(timing) = self.targets.get(target) else {
            return 1.0;
        };
        let elapsed = now
            .saturating_duration_since(self.mounted_at)
            .saturating_sub(timing.delay);
        if timing.duration.is_zero() || elapsed >= timing.duration {
            return 1.0;
        }
        elapsed.as_secs_f32() / timing.duration.as_secs_f32()
    }
}

impl Reveal for TerminalReveal {
    fn reveal(&mut self, target: &str, config: &RevealConfig) {
        self.targets.insert(
            target.to_string(),
            RevealTiming {
                delay: Duration::from_millis(config.delay),
                duration: Duration::from_millis(config.duration),
            },
        );
    }
}

/// Main application state for the preview
pub struct App {
    title: String,
    motion: MotionPreference,
    pub focus: ComponentId,
    pub history: WorkHistoryView,
    pub featured: FeaturedProjectsView,
    reveal: TerminalReveal,
    log_buffer: LogBuffer,
    autoplay: bool,
    last_autoplay: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        jobs: Vec<JobRecord>,
        projects: Vec<ProjectRecord>,
        log_buffer: LogBuffer,
        now: Instant,
    ) -> Self {
        let mut history = WorkHistoryView::new(jobs, config.motion, config.tabs.fade());
        let settings = config.carousel.settings();
        let autoplay = settings.autoplay;
        let mut featured = FeaturedProjectsView::new(projects, config.motion, settings);

        let mut reveal = TerminalReveal::new(now);
        let reveal_config = config.reveal.reveal_config();
        featured.mount(&reveal_config, &mut reveal);
        history.mount(&reveal_config, &mut reveal);

        Self {
            title: config.title.clone(),
            motion: config.motion,
            focus: ComponentId::default(),
            history,
            featured,
            reveal,
            log_buffer,
            autoplay,
            last_autoplay: now,
            should_quit: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    pub fn reveal_progress(&self, id: ComponentId, now: Instant) -> f32 {
        self.reveal.progress(id.reveal_target(), now)
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            ComponentId::Projects => self.featured.focus_hint(),
            ComponentId::Jobs => self.history.focus_hint(),
        }
    }

    /// Layered dispatch: global keys first, then the focused panel
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Handled::Yes;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return Handled::Yes;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.next_focus();
                return Handled::Yes;
            }
            _ => {}
        }

        let handled = match self.focus {
            ComponentId::Projects => self.featured.handle_key(key, now),
            ComponentId::Jobs => self.history.handle_key(key, now),
        };
        if handled.was_handled() && self.focus == ComponentId::Projects {
            // Manual navigation restarts the autoplay countdown
            self.last_autoplay = now;
        }
        handled
    }

    /// Periodic tick: advance the carousel when autoplay is due
    pub fn tick(&mut self, now: Instant) {
        if !self.autoplay || self.motion.is_reduced() {
            return;
        }
        if now.saturating_duration_since(self.last_autoplay) >= AUTOPLAY_INTERVAL {
            self.featured.advance(now);
            self.last_autoplay = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrustedHtml;

    fn job(company: &str) -> JobRecord {
        JobRecord {
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: String::new(),
            date_range: String::new(),
            url: String::new(),
            description: TrustedHtml::default(),
            body: String::new(),
        }
    }

    fn project(title: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            tech_tags: Vec::new(),
            source_url: None,
            demo_url: None,
            external_url: None,
            course_url: None,
            cover: None,
            description: TrustedHtml::default(),
            body: String::new(),
        }
    }

    fn app(config: &Config, now: Instant) -> App {
        App::new(
            config,
            vec![job("Acme"), job("Globex")],
            vec![project("A"), project("B")],
            LogBuffer::new(),
            now,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_routes_keys_to_other_section() {
        let now = Instant::now();
        let mut app = app(&Config::default(), now);

        app.handle_key(press(KeyCode::Right), now);
        assert_eq!(app.featured.carousel().current(), Some(1));
        assert_eq!(app.history.tabs().active_index(), Some(0));

        app.handle_key(press(KeyCode::Tab), now);
        assert_eq!(app.focus, ComponentId::Jobs);
        app.handle_key(press(KeyCode::Right), now);
        app.handle_key(press(KeyCode::Enter), now);
        assert_eq!(app.history.tabs().active_index(), Some(1));
        assert_eq!(app.featured.carousel().current(), Some(1));
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = app(&Config::default(), now);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.handle_key(ctrl_c, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_sections_reveal_after_mount() {
        let now = Instant::now();
        let app = app(&Config::default(), now);

        assert!(app.reveal.is_registered("#jobs"));
        assert!(app.reveal.is_registered("#projects-title"));
        assert_eq!(app.reveal_progress(ComponentId::Jobs, now), 0.0);
        // default delay 200ms + duration 500ms
        assert_eq!(
            app.reveal_progress(ComponentId::Jobs, now + Duration::from_millis(700)),
            1.0
        );
    }

    #[test]
    fn test_reduced_motion_is_visible_immediately() {
        let now = Instant::now();
        let config = Config {
            motion: MotionPreference::Reduce,
            ..Config::default()
        };
        let app = app(&config, now);
        assert!(!app.reveal.is_registered("#jobs"));
        assert_eq!(app.reveal_progress(ComponentId::Projects, now), 1.0);
    }

    #[test]
    fn test_autoplay_advances_on_tick() {
        let now = Instant::now();
        let mut config = Config::default();
        config.carousel.autoplay = true;
        let mut app = app(&config, now);

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.featured.carousel().current(), Some(0));
        app.tick(now + AUTOPLAY_INTERVAL);
        assert_eq!(app.featured.carousel().current(), Some(1));
    }

    #[test]
    fn test_no_autoplay_by_default() {
        let now = Instant::now();
        let mut app = app(&Config::default(), now);
        app.tick(now + AUTOPLAY_INTERVAL * 3);
        assert_eq!(app.featured.carousel().current(), Some(0));
    }
}
