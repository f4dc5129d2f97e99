// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to (or about) GitHub.
//
// Submodules:
// - url: parses a pasted repository URL into owner/name
// - types: the API response shapes we deserialize
// - api: the RepositoryApi trait and its reqwest implementation
// - decode: base64 -> UTF-8 decoding of file contents
// =============================================================================

mod api;
mod decode;
mod types;
mod url;

pub use api::{FetchedTree, GithubClient, RepositoryApi};
#[cfg(test)]
pub use api::MockRepositoryApi;
#[cfg(test)]
pub use types::TreeListing;
pub use types::{RepoMetadata, TreeEntry};
pub use self::url::{parse_repo_url, RepoSlug};
