// Work history section - one tab per employer, one panel per tab
//
// Exactly one panel is active. Inactive panels stay mounted (hidden and out
// of the tab order) so switching is instant. Panel swaps crossfade; the
// panel leaving is never interactive.

use super::reveal::{MotionPreference, Reveal, RevealConfig, RevealSlot};
use super::tabs::{TabCommand, TabSelectionState};
use super::transition::{Crossfade, Phase};
use crate::model::JobRecord;
use std::time::{Duration, Instant};

/// DOM id of the section container (reveal target)
pub const SECTION_ID: &str = "jobs";

/// `tab-{i}`
pub fn tab_id(index: usize) -> String {
    format!("tab-{index}")
}

/// `panel-{i}`
pub fn panel_id(index: usize) -> String {
    format!("panel-{index}")
}

#[derive(Debug, Clone)]
pub struct WorkHistoryView {
    jobs: Vec<JobRecord>,
    tabs: TabSelectionState,
    fade: Crossfade,
    motion: MotionPreference,
    reveal: RevealSlot,
}

impl WorkHistoryView {
    pub fn new(jobs: Vec<JobRecord>, motion: MotionPreference, fade: Duration) -> Self {
        let tabs = TabSelectionState::new(jobs.len());
        Self {
            jobs,
            tabs,
            fade: Crossfade::new(fade),
            motion,
            reveal: RevealSlot::new(),
        }
    }

    /// Register the section's reveal; once per instance, never under reduced motion
    pub fn mount(&mut self, config: &RevealConfig, revealer: &mut dyn Reveal) -> bool {
        let target = format!("#{SECTION_ID}");
        self.reveal.mount(self.motion, &[target.as_str()], config, revealer)
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn tabs(&self) -> &TabSelectionState {
        &self.tabs
    }

    /// Panel crossfade length, also emitted into the page stylesheet
    pub fn fade_duration(&self) -> Duration {
        self.fade.duration()
    }

    /// Click on tab `index`
    pub fn select_tab(&mut self, index: usize, now: Instant) -> bool {
        let previous = self.tabs.active_index();
        let changed = self.tabs.select(index);
        if changed {
            if let Some(previous) = previous {
                self.fade.begin(previous, now);
            }
            tracing::debug!("Work history tab {} -> {}", previous.unwrap_or(0), index);
        }
        changed
    }

    /// Keyboard command on the tab strip; returns whether the panel changed
    pub fn handle(&mut self, command: TabCommand, now: Instant) -> bool {
        let previous = self.tabs.active_index();
        let changed = self.tabs.apply(command);
        if changed {
            if let Some(previous) = previous {
                self.fade.begin(previous, now);
            }
        }
        changed
    }

    pub fn panel_phase(&self, index: usize, now: Instant) -> Phase {
        self.fade.phase(index, self.tabs.active_index(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reveal::ScriptReveal;
    use crate::model::TrustedHtml;

    const FADE: Duration = Duration::from_millis(250);

    fn job(company: &str) -> JobRecord {
        JobRecord {
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            date_range: "2020–2022".to_string(),
            url: format!("https://{}.example", company.to_lowercase()),
            description: TrustedHtml::new("<ul><li>Shipped</li></ul>"),
            body: "- Shipped\n".to_string(),
        }
    }

    fn view(n: usize) -> WorkHistoryView {
        let jobs = (0..n).map(|i| job(&format!("Co{i}"))).collect();
        WorkHistoryView::new(jobs, MotionPreference::NoPreference, FADE)
    }

    fn active_company(v: &WorkHistoryView) -> Option<&str> {
        let index = v.tabs().active_index()?;
        Some(v.jobs()[index].company.as_str())
    }

    #[test]
    fn test_exactly_one_panel_interactive() {
        for n in 1..6 {
            let v = view(n);
            let now = Instant::now();
            let active = (0..n)
                .filter(|&i| v.panel_phase(i, now).is_interactive())
                .count();
            assert_eq!(active, 1, "n = {n}");
        }
    }

    #[test]
    fn test_select_starts_crossfade_from_previous() {
        let t0 = Instant::now();
        let mut v = view(3);
        assert!(v.select_tab(2, t0));

        let mid = t0 + Duration::from_millis(100);
        assert!(matches!(v.panel_phase(0, mid), Phase::FadingOut { .. }));
        assert_eq!(v.panel_phase(2, mid), Phase::Active);
        assert!(!v.panel_phase(0, mid).is_interactive());

        let after = t0 + FADE;
        assert_eq!(v.panel_phase(0, after), Phase::Hidden);
    }

    #[test]
    fn test_reselect_does_not_restart_fade() {
        let t0 = Instant::now();
        let mut v = view(2);
        v.select_tab(1, t0);
        let later = t0 + Duration::from_millis(300);
        assert!(!v.select_tab(1, later));
        assert_eq!(v.panel_phase(0, later), Phase::Hidden);
        assert_eq!(v.tabs().active_index(), Some(1));
    }

    #[test]
    fn test_keyboard_focus_then_activate() {
        let t0 = Instant::now();
        let mut v = view(3);
        assert!(!v.handle(TabCommand::FocusPrev, t0));
        assert_eq!(v.tabs().focus_index(), Some(2));
        assert_eq!(active_company(&v), Some("Co0"));

        assert!(v.handle(TabCommand::Activate, t0));
        assert_eq!(active_company(&v), Some("Co2"));
    }

    #[test]
    fn test_empty_history() {
        let mut v = view(0);
        let now = Instant::now();
        assert_eq!(active_company(&v), None);
        assert!(!v.handle(TabCommand::FocusNext, now));
        assert_eq!(v.tabs().focus_index(), None);
        assert!(!v.handle(TabCommand::Activate, now));
    }

    #[test]
    fn test_mount_registers_section_once() {
        let mut v = view(1);
        let mut sr = ScriptReveal::new();
        let config = RevealConfig::default();
        assert!(v.mount(&config, &mut sr));
        assert!(!v.mount(&config, &mut sr));
        assert_eq!(sr.registrations().len(), 1);
        assert_eq!(sr.registrations()[0].0, "#jobs");
    }

    #[test]
    fn test_mount_under_reduced_motion() {
        let mut v = WorkHistoryView::new(vec![job("Acme")], MotionPreference::Reduce, FADE);
        let mut sr = ScriptReveal::new();
        assert!(!v.mount(&RevealConfig::default(), &mut sr));
        assert!(sr.is_empty());
    }

    #[test]
    fn test_fade_duration_follows_construction() {
        let fade = Duration::from_millis(400);
        let v = WorkHistoryView::new(Vec::new(), MotionPreference::NoPreference, fade);
        assert_eq!(v.fade_duration(), Duration::from_millis(400));
    }

    #[test]
    fn test_ids() {
        assert_eq!(tab_id(3), "tab-3");
        assert_eq!(panel_id(0), "panel-0");
    }
}
