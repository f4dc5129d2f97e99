// src/render/markdown.rs
// =============================================================================
// Converts Markdown text to HTML with pulldown-cmark.
//
// Dialect: GitHub-flavoured Markdown, close to what github.com renders:
// - tables, strikethrough, task lists, footnotes
// - a single newline inside a paragraph becomes a <br />
//
// Raw HTML inside the Markdown is passed through untouched. Making that safe
// is the sanitizer's job (see sanitize.rs), not this module's.
// =============================================================================

use pulldown_cmark::{html, Event, Options, Parser};

pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    // Soft breaks (plain newlines) render as hard breaks
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
