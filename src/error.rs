// src/error.rs
// =============================================================================
// Error types for the repository browsing flow.
//
// Every failure that can end a load ends up as one of these variants:
// - InvalidInput: the user submitted nothing
// - InvalidUrl: the text was not a github.com repository URL
// - Network: the API answered with a non-success HTTP status
// - Transport: the request never got an answer (connect, timeout, ...)
// - Json: the API answered 2xx but the body had an unexpected shape
// - Decode: the base64 file body or its UTF-8 text was malformed
//
// The Display text of each variant is exactly what the view shows the user.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Please enter a GitHub repository URL")]
    InvalidInput,

    #[error("Invalid GitHub URL. Please use format: https://github.com/owner/repository")]
    InvalidUrl,

    /// Non-success status from one of the three endpoints.
    /// `context` names what was being fetched ("repository", "file tree", ...)
    #[error("Failed to fetch {context}: {status} {reason}")]
    Network {
        context: &'static str,
        status: u16,
        reason: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not decode file content: {0}")]
    Decode(String),

    #[error("Invalid API base URL: {0}")]
    InvalidApiBase(String),
}

/// Result type alias using BrowseError
pub type Result<T> = std::result::Result<T, BrowseError>;

impl BrowseError {
    pub fn network(context: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Network {
            context,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<base64::DecodeError> for BrowseError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(format!("invalid base64: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for BrowseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Decode(format!("invalid UTF-8: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            BrowseError::InvalidInput.to_string(),
            "Please enter a GitHub repository URL"
        );
        assert_eq!(
            BrowseError::InvalidUrl.to_string(),
            "Invalid GitHub URL. Please use format: https://github.com/owner/repository"
        );
    }

    #[test]
    fn test_network_error_carries_status_and_reason() {
        let err = BrowseError::network("repository", reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch repository: 404 Not Found");
        assert!(matches!(err, BrowseError::Network { status: 404, .. }));
    }

    #[test]
    fn test_decode_conversions() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: BrowseError = utf8_err.into();
        assert!(matches!(err, BrowseError::Decode(_)));
        assert!(err.to_string().starts_with("Could not decode file content: invalid UTF-8"));
    }
}
