//! Error types for calls to the chat backend.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single backend call.
///
/// Every variant is a transport failure from the session's point of view:
/// the controller absorbs all of them into a status update.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{url} returned {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status {
        url: String,
        status: StatusCode,
        /// The `detail` field of the error body, when the backend sent one.
        detail: Option<String>,
    },

    /// The response body was not the JSON we expected.
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The URL the failed request was sent to.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }

    /// Diagnostic detail reported by the backend, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
