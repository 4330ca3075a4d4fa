// Featured projects panel - one carousel slide at a time
//
// Renders the current slide with its tech tags and action links, plus a
// position indicator standing in for the dots. A slide that is fading out is
// shown dimmed until the crossfade completes.

use super::text::markdown_lines;
use crate::components::{FeaturedProjectsView, Phase};
use crate::model::{ActionLink, ProjectRecord};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

fn visible_slide(view: &FeaturedProjectsView, now: Instant) -> Option<(usize, Phase)> {
    let outgoing = (0..view.projects().len())
        .map(|i| (i, view.slide_phase(i, now)))
        .find(|(_, phase)| matches!(phase, Phase::FadingOut { .. }));
    outgoing.or_else(|| view.carousel().current().map(|i| (i, Phase::Active)))
}

fn action_label(link: &ActionLink<'_>) -> String {
    match link {
        ActionLink::LearnMore(url) => format!("Learn More → {url}"),
        ActionLink::Source(url) => format!("[source] {url}"),
        ActionLink::Demo(url) => format!("[demo] {url}"),
        ActionLink::External(url) => format!("[link] {url}"),
    }
}

fn slide_lines(project: &ProjectRecord) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        project.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !project.tech_tags.is_empty() {
        lines.push(Line::from(Span::styled(
            project.tech_tags.join(" · "),
            Style::default().fg(Color::Green),
        )));
    }
    lines.push(Line::default());
    lines.extend(markdown_lines(&project.body));

    let links = project.action_links();
    if !links.is_empty() {
        lines.push(Line::default());
        lines.extend(links.iter().map(|link| {
            Line::from(Span::styled(
                action_label(link),
                Style::default().fg(Color::Cyan),
            ))
        }));
    }
    lines
}

/// "● ○ ○" style position indicator
fn position_indicator(view: &FeaturedProjectsView) -> String {
    let current = view.carousel().current();
    (0..view.projects().len())
        .map(|i| if current == Some(i) { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Component for FeaturedProjectsView {
    fn id(&self) -> ComponentId {
        ComponentId::Projects
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let border = if focused { Color::Yellow } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Projects ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.projects().is_empty() {
            f.render_widget(
                Paragraph::new("No featured projects").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let mut style = if ctx.is_revealing() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        if let Some((index, phase)) = visible_slide(self, ctx.now) {
            if !phase.is_interactive() {
                style = style.add_modifier(Modifier::DIM);
            }
            f.render_widget(
                Paragraph::new(slide_lines(&self.projects()[index]))
                    .style(style)
                    .wrap(Wrap { trim: true }),
                chunks[0],
            );
        }

        if self.projects().len() > 1 {
            f.render_widget(
                Paragraph::new(format!("‹  {}  ›", position_indicator(self)))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray)),
                chunks[1],
            );
        }
    }
}

impl Interactive for FeaturedProjectsView {
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled {
        // Digits stand in for the dot buttons
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c as usize - '1' as usize;
            if index < self.projects().len() {
                self.go_to(index, now);
                return Handled::Yes;
            }
            return Handled::No;
        }

        match key.code {
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => {
                self.advance(now);
                Handled::Yes
            }
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => {
                self.retreat(now);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "←/p previous  →/n next  1-9 jump"
    }
}
