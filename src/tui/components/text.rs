// Terminal rendering of markdown description bodies
//
// Walks pulldown-cmark events into styled lines: paragraphs, headings and
// list items each start a new line, list items get a bullet indented by
// nesting depth. Raw HTML is dropped; entities are already decoded by the
// parser.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Accumulates spans for the line being built
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    modifiers: Vec<Modifier>,
    list_depth: usize,
}

impl LineBuilder {
    fn style(&self) -> Style {
        self.modifiers
            .iter()
            .fold(Style::default(), |style, m| style.add_modifier(*m))
    }

    /// Code blocks arrive as one text event with embedded newlines
    fn push_text(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.flush();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), self.style()));
            }
        }
    }

    /// Close the current line; empty lines are skipped
    fn flush(&mut self) {
        let has_text = self.current.iter().any(|s| !s.content.trim().is_empty());
        let spans = std::mem::take(&mut self.current);
        if has_text {
            self.lines.push(Line::from(spans));
        }
    }
}

/// Convert a markdown body to display lines
pub fn markdown_lines(markdown: &str) -> Vec<Line<'static>> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let mut b = LineBuilder::default();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(text) | Event::Code(text) => b.push_text(&text),
            Event::SoftBreak => b.push_text(" "),
            Event::HardBreak => b.flush(),

            Event::Start(Tag::Heading { .. }) => {
                b.flush();
                b.modifiers.push(Modifier::BOLD);
            }
            Event::Start(Tag::Strong) => b.modifiers.push(Modifier::BOLD),
            Event::Start(Tag::Emphasis) => b.modifiers.push(Modifier::ITALIC),
            Event::Start(Tag::Strikethrough) => b.modifiers.push(Modifier::CROSSED_OUT),
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough) => {
                b.modifiers.pop();
            }
            Event::End(TagEnd::Heading(_)) => {
                b.modifiers.pop();
                b.flush();
            }

            Event::Start(Tag::List(_)) => {
                b.flush();
                b.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                b.flush();
                b.list_depth = b.list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                b.flush();
                let indent = "  ".repeat(b.list_depth.saturating_sub(1));
                b.current.push(Span::raw(format!("{indent}• ")));
            }
            Event::End(TagEnd::TableCell) => b.push_text("  "),
            Event::End(
                TagEnd::Item
                | TagEnd::Paragraph
                | TagEnd::TableHead
                | TagEnd::TableRow
                | TagEnd::CodeBlock,
            ) => b.flush(),
            Event::Rule => {
                b.flush();
                b.lines.push(Line::from("───"));
            }

            // Html, InlineHtml, footnotes and the remaining container tags
            _ => {}
        }
    }
    b.flush();
    b.lines
}

/// Clip `text` to `max` display columns, ending in "…" when clipped
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
