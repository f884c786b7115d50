//! Fetch Errors

use thiserror::Error;

/// Failure of a projects fetch. Every variant ends up as the same
/// generic failure view; the message is kept for logs and state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! Status: 404");
    }

    #[test]
    fn test_json_error_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Parse(_)));
    }
}
