// src/github/url.rs
// =============================================================================
// Parses a pasted GitHub repository URL into its owner and repository name.
//
// Strategy:
// - Trim whitespace, then hand the text to the `url` crate
// - The host must be exactly "github.com"
// - The path needs at least two non-empty segments: /owner/name
// - Anything after the first two segments (/tree/x, /blob/...) is ignored
// - Segments are percent-decoded, since the API client encodes them again
//
// This never fails loudly: a string that is not a repository URL is just
// "no match" (None). The caller decides what message to show.
// =============================================================================

use percent_encoding::percent_decode_str;
use url::Url;

/// Host the pasted URL must point at
pub const GITHUB_HOST: &str = "github.com";

/// Owner and name of a repository, as they appear in its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

// Parses a GitHub repository URL
//
// Examples:
//   "https://github.com/rust-lang/rust"          -> Some(rust-lang, rust)
//   "https://github.com/rust-lang/rust/tree/x"   -> Some(rust-lang, rust)
//   "https://gitlab.com/rust-lang/rust"          -> None (wrong host)
//   "github.com/rust-lang/rust"                  -> None (not an absolute URL)
//   "https://github.com/rust-lang"               -> None (one segment)
pub fn parse_repo_url(input: &str) -> Option<RepoSlug> {
    let url = Url::parse(input.trim()).ok()?;

    if url.host_str() != Some(GITHUB_HOST) {
        return None;
    }

    // Empty segments come from doubled or trailing slashes; skip them
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let owner = decode_segment(segments.next()?)?;
    let name = decode_segment(segments.next()?)?;

    Some(RepoSlug { owner, name })
}

// `Url::path_segments` hands segments back still percent-encoded
fn decode_segment(segment: &str) -> Option<String> {
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    Some(decoded.into_owned())
}
