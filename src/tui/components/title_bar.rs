// Title bar component
//
// Site title on the left, motion preference on the right, both on the row
// above the bottom border.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let motion = if app.motion().is_reduced() {
        "reduced motion "
    } else {
        "motion on "
    };

    f.render_widget(
        Paragraph::new(format!(" {}", app.title())).style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        inner,
    );
    f.render_widget(
        Paragraph::new(motion)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn top_row(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        terminal.draw(|f| render(f, f.area(), app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..60u16).map(|x| buffer[(x, 0u16)].symbol()).collect()
    }

    #[test]
    fn test_title_and_motion_share_the_top_row() {
        let app = App::new(
            &Config::default(),
            Vec::new(),
            Vec::new(),
            LogBuffer::new(),
            Instant::now(),
        );
        let row = top_row(&app);
        assert!(row.starts_with(" Portfolio"), "row was {row:?}");
        assert!(row.trim_end().ends_with("motion on"));
    }
}
