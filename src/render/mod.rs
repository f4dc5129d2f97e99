// src/render/mod.rs
// =============================================================================
// Turns raw file text into markup that is safe to put on a page.
//
// The render mode is picked from the lowercased file extension:
// - ".md"            -> Markdown, converted to HTML, then sanitized
// - ".html" and rest -> shown literally: escaped text in <pre><code>
//
// HTML files are never rendered as HTML. They are untrusted and we only
// want to preview their source.
//
// Submodules:
// - escape: entity-escaping for literal display
// - markdown: pulldown-cmark conversion
// - sanitize: the optional ammonia sanitizer
// - page: wraps rendered content into a standalone HTML document
// =============================================================================

mod escape;
mod markdown;
mod page;
mod sanitize;

use log::warn;
use serde::Serialize;

use escape::escape_html;
use markdown::markdown_to_html;
pub use page::standalone_document;
use sanitize::Sanitizer;

/// How a file's text is turned into markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Markdown,
    Literal,
}

impl RenderMode {
    pub fn for_path(path: &str) -> Self {
        if path.to_lowercase().ends_with(".md") {
            RenderMode::Markdown
        } else {
            RenderMode::Literal
        }
    }
}

/// Why the produced markup can (or cannot) be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Safety {
    /// Literal text, entity-escaped
    Escaped,
    /// Markdown HTML that went through the sanitizer
    Sanitized,
    /// Markdown HTML shown without sanitizing: no sanitizer in this build
    Unsanitized,
}

/// Output of a render: markup ready to be made visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedContent {
    pub path: String,
    pub mode: RenderMode,
    pub safety: Safety,
    pub markup: String,
}

impl RenderedContent {
    pub fn is_safe(&self) -> bool {
        self.safety != Safety::Unsanitized
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    sanitizer: Sanitizer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Sanitizer::detect())
    }
}

impl Renderer {
    pub fn new(sanitizer: Sanitizer) -> Self {
        Self { sanitizer }
    }

    /// Renderer that takes the degraded path on purpose
    pub fn unsanitized() -> Self {
        Self::new(Sanitizer::Unavailable)
    }

    pub fn sanitizer(&self) -> Sanitizer {
        self.sanitizer
    }

    pub fn render(&self, path: &str, text: &str) -> RenderedContent {
        let mode = RenderMode::for_path(path);

        let (markup, safety) = match mode {
            RenderMode::Markdown => {
                let html = markdown_to_html(text);
                match self.sanitizer.clean(&html) {
                    Some(clean) => (clean, Safety::Sanitized),
                    None => {
                        warn!("no HTML sanitizer available, showing {} unsanitized", path);
                        (html, Safety::Unsanitized)
                    }
                }
            }
            RenderMode::Literal => (
                format!("<pre><code>{}</code></pre>", escape_html(text)),
                Safety::Escaped,
            ),
        };

        RenderedContent {
            path: path.to_string(),
            mode,
            safety,
            markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const HOSTILE_MD: &str = "# Docs\n\n<script>alert('x')</script>\n\n<img src=\"a.png\" onerror=\"alert(1)\">\n\n[click](javascript:alert(1))\n";

    // Counts elements with an on* attribute, plus <script> elements
    fn active_content(markup: &str) -> usize {
        let doc = Html::parse_fragment(markup);
        let scripts = doc.select(&Selector::parse("script").unwrap()).count();
        let all = Selector::parse("*").unwrap();
        let handlers = doc
            .select(&all)
            .filter(|el| el.value().attrs().any(|(name, _)| name.starts_with("on")))
            .count();
        scripts + handlers
    }

    #[test]
    fn test_mode_by_extension() {
        assert_eq!(RenderMode::for_path("README.md"), RenderMode::Markdown);
        assert_eq!(RenderMode::for_path("docs/GUIDE.MD"), RenderMode::Markdown);
        assert_eq!(RenderMode::for_path("index.html"), RenderMode::Literal);
        assert_eq!(RenderMode::for_path("notes.txt"), RenderMode::Literal);
        assert_eq!(RenderMode::for_path("Makefile"), RenderMode::Literal);
        assert_eq!(RenderMode::for_path("md"), RenderMode::Literal);
    }

    #[test]
    fn test_html_file_shown_as_escaped_code() {
        let rendered = Renderer::default().render("index.html", "<h1 class=\"x\">Hi & 'bye'</h1>");
        assert_eq!(rendered.mode, RenderMode::Literal);
        assert_eq!(rendered.safety, Safety::Escaped);
        assert_eq!(
            rendered.markup,
            "<pre><code>&lt;h1 class=&quot;x&quot;&gt;Hi &amp; &#039;bye&#039;&lt;/h1&gt;</code></pre>"
        );
        assert!(rendered.is_safe());
    }

    #[test]
    fn test_script_in_html_file_is_not_executable() {
        let rendered = Renderer::unsanitized().render("page.html", "<script>alert(1)</script>");
        assert_eq!(active_content(&rendered.markup), 0);
    }

    #[cfg(feature = "sanitize")]
    #[test]
    fn test_markdown_is_sanitized() {
        let rendered = Renderer::default().render("README.md", HOSTILE_MD);
        assert_eq!(rendered.mode, RenderMode::Markdown);
        assert_eq!(rendered.safety, Safety::Sanitized);
        assert!(rendered.markup.contains("<h1>Docs</h1>"));
        assert_eq!(active_content(&rendered.markup), 0);
        assert!(!rendered.markup.contains("javascript:"));
    }

    #[test]
    fn test_markdown_without_sanitizer_is_flagged() {
        let rendered = Renderer::unsanitized().render("README.md", HOSTILE_MD);
        assert_eq!(rendered.safety, Safety::Unsanitized);
        assert!(!rendered.is_safe());
        // The degraded path really is degraded
        assert!(active_content(&rendered.markup) > 0);
    }

    #[test]
    fn test_render_does_not_touch_inputs() {
        let text = String::from("*hi*");
        let path = String::from("a.md");
        let rendered = Renderer::default().render(&path, &text);
        assert_eq!(rendered.path, "a.md");
        assert_eq!(text, "*hi*");
    }
}
