// Status bar component
//
// Key hints for the focused panel, plus the most recent log line so
// warnings raised while loading content stay visible in the preview.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(format!(
        " Tab switch │ {} │ q quit",
        app.focus_hint()
    ))];

    if let Some(entry) = app.log_buffer().latest() {
        let color = match entry.level {
            LogLevel::Error => Color::Red,
            LogLevel::Warn => Color::Yellow,
            _ => Color::DarkGray,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!(
                "{} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::{LogBuffer, LogEntry};
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    #[test]
    fn test_latest_log_line_is_timestamped() {
        let logs = LogBuffer::new();
        logs.push(LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 15).unwrap(),
            level: LogLevel::Warn,
            message: "Cover missing".to_string(),
        });
        let now = Instant::now();
        let app = App::new(&Config::default(), Vec::new(), Vec::new(), logs, now);

        let mut terminal = Terminal::new(TestBackend::new(160, 2)).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("09:30:15 WARN Cover missing"));
    }
}
