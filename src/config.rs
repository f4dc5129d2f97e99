// src/config.rs
// =============================================================================
// Settings for talking to the GitHub API.
//
// There are no config files and no environment variables: everything comes
// from command-line flags (see cli.rs). Tests point `api_base` at a local
// mock server instead of api.github.com.
// =============================================================================

use std::time::Duration;

use url::Url;

/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitHub rejects requests that carry no User-Agent header
pub const USER_AGENT: &str = concat!("repo-preview/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub timeout: Duration,
    pub user_agent: &'static str,
}

impl ClientConfig {
    pub fn new(api_base: Url, timeout: Duration) -> Self {
        Self {
            api_base,
            timeout,
            user_agent: USER_AGENT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            // Constant and known to be valid
            Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}
