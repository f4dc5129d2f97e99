// src/render/escape.rs
// =============================================================================
// Escapes text so the browser shows it literally instead of parsing it.
//
// The five characters that matter inside element content and quoted
// attribute values are replaced with entities:
//   &  ->  &amp;
//   <  ->  &lt;
//   >  ->  &gt;
//   "  ->  &quot;
//   '  ->  &#039;
// =============================================================================

pub fn escape_html(text: &str) -> String {
    // Escaped output is never shorter than the input
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }

    out
}
