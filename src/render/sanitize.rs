// src/render/sanitize.rs
// =============================================================================
// Strips active content (scripts, event handlers, javascript: URLs) out of
// untrusted markup before it is shown.
//
// The sanitizer is the `ammonia` crate, compiled in by the default
// `sanitize` feature. Without it the renderer still works but hands back
// the markup as-is, and says so: see Safety::Unsanitized in mod.rs.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    #[cfg(feature = "sanitize")]
    Ammonia,
    /// No sanitizer: markup passes through unchanged
    Unavailable,
}

impl Sanitizer {
    // Picks the best sanitizer this build has
    pub fn detect() -> Self {
        #[cfg(feature = "sanitize")]
        {
            Sanitizer::Ammonia
        }
        #[cfg(not(feature = "sanitize"))]
        {
            Sanitizer::Unavailable
        }
    }

    pub fn is_available(self) -> bool {
        self != Sanitizer::Unavailable
    }

    // Returns the cleaned markup, or None when there is nothing to clean with
    pub fn clean(self, markup: &str) -> Option<String> {
        match self {
            #[cfg(feature = "sanitize")]
            Sanitizer::Ammonia => Some(ammonia::clean(markup)),
            Sanitizer::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_sanitizer_returns_nothing() {
        assert!(!Sanitizer::Unavailable.is_available());
        assert_eq!(Sanitizer::Unavailable.clean("<script>x</script>"), None);
    }

    #[cfg(feature = "sanitize")]
    #[test]
    fn test_ammonia_strips_active_content() {
        let sanitizer = Sanitizer::detect();
        assert!(sanitizer.is_available());

        let cleaned = sanitizer
            .clean(r#"<p onclick="steal()">hi</p><script>alert(1)</script><a href="javascript:alert(1)">x</a>"#)
            .unwrap();

        assert!(!cleaned.contains("<script"));
        assert!(!cleaned.contains("onclick"));
        assert!(!cleaned.contains("javascript:"));
        assert!(cleaned.contains("<p>hi</p>"));
    }
}
