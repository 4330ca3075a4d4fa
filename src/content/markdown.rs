// Markdown body rendering
//
// Uses pulldown-cmark's HTML writer. Raw HTML inside the markdown passes
// through untouched: content files are trusted input.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to an HTML string
pub fn render_html(markdown: &str) -> String {
    // Same extensions the terminal renderer understands
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
