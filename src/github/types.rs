// src/github/types.rs
// =============================================================================
// Shapes of the three GitHub REST API responses we read.
//
// We only declare the fields the browsing flow looks at. serde ignores the
// rest of the (large) payloads, so new fields on GitHub's side are harmless.
// =============================================================================

use serde::{Deserialize, Serialize};

/// GET /repos/{owner}/{name}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub default_branch: String,
    pub full_name: String,
    /// GitHub sends `null` for repositories without a description
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

/// Type discriminator of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule pointer
    Commit,
    #[serde(other)]
    Other,
}

/// One record of a recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl TreeEntry {
    #[cfg(test)]
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    #[cfg(test)]
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
        }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

/// GET /repos/{owner}/{name}/git/trees/{branch}?recursive=1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    pub tree: Vec<TreeEntry>,
    /// GitHub sets this when the listing was cut short; we don't paginate
    #[serde(default)]
    pub truncated: bool,
}

/// GET /repos/{owner}/{name}/contents/{path}?ref={branch}
///
/// `content` is missing for directories and for files too large for the
/// contents endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileContents {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}
