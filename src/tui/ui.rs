// Frame layout
//
// ┌ title ───────────────────────────┐
// │ projects (carousel)              │
// │ jobs (tabs + panel)              │
// └ status ──────────────────────────┘

use super::app::App;
use super::components::{status_bar, title_bar};
use super::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Percentage(45),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    let projects_ctx = RenderContext::new(
        app.focus,
        now,
        app.reveal_progress(ComponentId::Projects, now),
    );
    app.featured.render(f, chunks[1], &projects_ctx);

    let jobs_ctx = RenderContext::new(app.focus, now, app.reveal_progress(ComponentId::Jobs, now));
    app.history.render(f, chunks[2], &jobs_ctx);

    status_bar::render(f, chunks[3], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::model::{JobRecord, TrustedHtml};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_full_frame_renders_both_sections() {
        let now = Instant::now();
        let jobs = vec![JobRecord {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: String::new(),
            date_range: "2019 - 2021".to_string(),
            url: "https://acme.example".to_string(),
            description: TrustedHtml::new("<p>Built things</p>"),
            body: "Built things\n".to_string(),
        }];
        let logs = LogBuffer::new();
        let app = App::new(&Config::default(), jobs, Vec::new(), logs, now);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw(f, &app, now + Duration::from_secs(5)))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Portfolio"));
        assert!(screen.contains("Projects"));
        assert!(screen.contains("No featured projects"));
        assert!(screen.contains("Built things"));
        assert!(screen.contains("q quit"));
    }
}
