// src/render/page.rs
// =============================================================================
// Wraps rendered content in a minimal standalone HTML document, so a preview
// can be written to disk (--output) and opened in a browser.
// =============================================================================

use super::escape::escape_html;

pub fn standalone_document(title: &str, body_markup: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<main class=\"file-content\">\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        body_markup
    )
}
