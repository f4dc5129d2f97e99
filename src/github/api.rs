// src/github/api.rs
// =============================================================================
// The three GitHub REST API calls the browser makes.
//
// Endpoints (all anonymous GETs, no auth header):
//   /repos/{owner}/{name}                                 -> RepoMetadata
//   /repos/{owner}/{name}/git/trees/{branch}?recursive=1  -> TreeListing
//   /repos/{owner}/{name}/contents/{path}?ref={branch}    -> file text
//
// Retry policy: exactly one. A tree fetch for the branch "main" that gets a
// non-success status is retried once against "master". No other call and no
// other branch name is ever retried.
//
// The calls sit behind the RepositoryApi trait so the orchestrator can be
// tested with a generated mock instead of a network.
// =============================================================================

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::config::ClientConfig;
use crate::error::{BrowseError, Result};
use crate::github::decode::decode_file_contents;
use crate::github::types::{FileContents, RepoMetadata, TreeListing};

/// Branch name whose failed tree fetch triggers the one retry
pub const FALLBACK_FROM_BRANCH: &str = "main";
/// Branch name the retry goes to
pub const FALLBACK_TO_BRANCH: &str = "master";

/// A tree listing together with the branch that actually served it.
/// `branch` differs from the requested one only after the main -> master retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTree {
    pub branch: String,
    pub listing: TreeListing,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepositoryApi {
    /// Repository metadata; fails with BrowseError::Network on non-2xx
    async fn fetch_metadata(&self, owner: &str, name: &str) -> Result<RepoMetadata>;

    /// Recursive tree listing for `branch`, with the main -> master retry
    async fn fetch_tree(&self, owner: &str, name: &str, branch: &str) -> Result<FetchedTree>;

    /// Decoded UTF-8 text of one file at `branch`; empty if GitHub sent no content
    async fn fetch_file_content(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        branch: &str,
    ) -> Result<String>;
}

/// reqwest-backed client for api.github.com (or any compatible base URL)
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // A base like "mailto:..." has no path we could append /repos/... to
        if config.api_base.cannot_be_a_base() {
            return Err(BrowseError::InvalidApiBase(config.api_base.to_string()));
        }

        // GitHub recommends asking for its versioned JSON media type
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    // Builds an endpoint URL under the API base
    //
    // Every piece is pushed as its own path segment, so characters like '?'
    // or '#' in a file name get percent-encoded instead of changing the URL.
    // `nested` values (file paths, branch names) keep their '/' separators.
    fn endpoint(&self, owner: &str, name: &str, tail: &[&str], nested: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BrowseError::InvalidApiBase(self.api_base.to_string()))?;
            // Drop the trailing empty segment of "https://host/" style bases
            segments.pop_if_empty();
            segments.extend(["repos", owner, name]);
            segments.extend(tail);
            segments.extend(nested.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    // Issues one GET and parses the JSON body
    //
    // `context` ends up in the error text: "Failed to fetch {context}: 404 Not Found"
    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &'static str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        // Check if the API accepted the request (2xx status codes)
        let status = response.status();
        if !status.is_success() {
            debug!("{} request failed with HTTP {}", context, status);
            return Err(BrowseError::network(context, status));
        }

        // Read the body first so a bad payload is a Json error, not a Transport one
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_tree_once(&self, owner: &str, name: &str, branch: &str) -> Result<TreeListing> {
        let mut url = self.endpoint(owner, name, &["git", "trees"], branch)?;
        // Ask for the whole tree in one listing instead of one level
        url.query_pairs_mut().append_pair("recursive", "1");
        self.get_json(url, "file tree").await
    }
}

#[async_trait]
impl RepositoryApi for GithubClient {
    async fn fetch_metadata(&self, owner: &str, name: &str) -> Result<RepoMetadata> {
        let url = self.endpoint(owner, name, &[], "")?;
        self.get_json(url, "repository").await
    }

    async fn fetch_tree(&self, owner: &str, name: &str, branch: &str) -> Result<FetchedTree> {
        // First attempt: the branch the metadata reported
        match self.fetch_tree_once(owner, name, branch).await {
            Ok(listing) => Ok(FetchedTree {
                branch: branch.to_string(),
                listing,
            }),
            Err(BrowseError::Network { status, .. }) if branch == FALLBACK_FROM_BRANCH => {
                warn!(
                    "tree for '{}' failed with HTTP {}, retrying once with '{}'",
                    FALLBACK_FROM_BRANCH, status, FALLBACK_TO_BRANCH
                );
                // Second and last attempt; its error is the one the user sees
                let listing = self.fetch_tree_once(owner, name, FALLBACK_TO_BRANCH).await?;
                Ok(FetchedTree {
                    branch: FALLBACK_TO_BRANCH.to_string(),
                    listing,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_file_content(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        branch: &str,
    ) -> Result<String> {
        // Pin the read to the branch the listing came from
        let mut url = self.endpoint(owner, name, &["contents"], path)?;
        url.query_pairs_mut().append_pair("ref", branch);
        let contents: FileContents = self.get_json(url, "file content").await?;

        // The body is base64 with line breaks; turn it back into text
        decode_file_contents(&contents)
    }
}
