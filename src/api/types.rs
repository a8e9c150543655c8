//! Request and response bodies for the chat backend.
//!
//! Response fields are optional: a field the backend leaves out simply
//! leaves the matching piece of session state unchanged.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

/// Response of `GET /api/state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StateResponse {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub auto: Option<bool>,
}

/// Successful response of `POST /api/chat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub auto: Option<bool>,
}

/// Response of `POST /api/profile/{mode}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub profile: Option<String>,
}

/// Response of `POST /api/auto/{0|1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AutoResponse {
    #[serde(default)]
    pub auto: Option<bool>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// Error body returned alongside a non-2xx status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Extracts `detail` from a raw body, ignoring bodies that are not JSON.
    pub(crate) fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty())
    }
}
