// Work history panel
//
// Tab strip on the left (or stacked on top in narrow terminals), the active
// job on the right. While a tab switch is fading, the outgoing job stays on
// screen dimmed until the fade completes.

use super::text::{markdown_lines, truncate_to_width};
use crate::components::{Phase, TabCommand, WorkHistoryView};
use crate::model::JobRecord;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

/// Keyboard mapping for the tab strip
pub fn tab_command(code: KeyCode) -> Option<TabCommand> {
    match code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Some(TabCommand::FocusPrev),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => Some(TabCommand::FocusNext),
        KeyCode::Home => Some(TabCommand::FocusFirst),
        KeyCode::End => Some(TabCommand::FocusLast),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TabCommand::Activate),
        _ => None,
    }
}

/// Job whose panel should be on screen right now; a fading panel wins
fn visible_job(view: &WorkHistoryView, now: Instant) -> Option<(usize, Phase)> {
    let outgoing = (0..view.jobs().len())
        .map(|i| (i, view.panel_phase(i, now)))
        .find(|(_, phase)| matches!(phase, Phase::FadingOut { .. }));
    outgoing.or_else(|| view.tabs().active_index().map(|i| (i, Phase::Active)))
}

fn job_lines(job: &JobRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                job.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" @ "),
            Span::styled(
                job.company.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(Span::styled(
            job.date_range.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    lines.extend(markdown_lines(&job.body));
    lines
}

impl Component for WorkHistoryView {
    fn id(&self) -> ComponentId {
        ComponentId::Jobs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let border = if focused { Color::Yellow } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Where I’ve Worked ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.jobs().is_empty() {
            f.render_widget(
                Paragraph::new("No positions yet").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let base = if ctx.is_revealing() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let (strip_area, panel_area) = match Breakpoint::from_width(inner.width).tab_strip_width()
        {
            Some(width) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(width), Constraint::Min(10)])
                    .split(inner);
                (chunks[0], chunks[1])
            }
            None => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(2), Constraint::Min(1)])
                    .split(inner);
                (chunks[0], chunks[1])
            }
        };

        let focus = self.tabs().focus_index().filter(|_| focused);
        let label_style = |i: usize| {
            let mut style = base;
            if self.tabs().is_active(i) {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if focus == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            style
        };

        if strip_area.height <= 2 {
            let titles: Vec<Line> = self
                .jobs()
                .iter()
                .enumerate()
                .map(|(i, job)| Line::styled(job.company.clone(), label_style(i)))
                .collect();
            let mut tabs = Tabs::new(titles).block(Block::default().borders(Borders::BOTTOM));
            if let Some(active) = self.tabs().active_index() {
                tabs = tabs.select(active);
            }
            f.render_widget(tabs, strip_area);
        } else {
            let label_width = usize::from(strip_area.width.saturating_sub(2));
            let items: Vec<ListItem> = self
                .jobs()
                .iter()
                .enumerate()
                .map(|(i, job)| {
                    let marker = if self.tabs().is_active(i) { "▌" } else { " " };
                    let label = truncate_to_width(&job.company, label_width);
                    ListItem::new(Line::styled(format!("{marker}{label}"), label_style(i)))
                })
                .collect();
            f.render_widget(
                List::new(items).block(Block::default().borders(Borders::RIGHT)),
                strip_area,
            );
        }

        if let Some((index, phase)) = visible_job(self, ctx.now) {
            let style = if phase.is_interactive() {
                base
            } else {
                base.add_modifier(Modifier::DIM)
            };
            let panel = Paragraph::new(job_lines(&self.jobs()[index]))
                .style(style)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::NONE));
            let padded = Rect {
                x: panel_area.x.saturating_add(1),
                width: panel_area.width.saturating_sub(1),
                ..panel_area
            };
            f.render_widget(panel, padded);
        }
    }
}

impl Interactive for WorkHistoryView {
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Handled {
        // Digits pick a tab directly, like clicking it
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c as usize - '1' as usize;
            if index < self.jobs().len() {
                self.select_tab(index, now);
                return Handled::Yes;
            }
            return Handled::No;
        }

        match tab_command(key.code) {
            Some(command) => {
                self.handle(command, now);
                Handled::Yes
            }
            None => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "←→/↑↓ focus  Home/End  Enter/Space select  1-9 jump"
    }
}
