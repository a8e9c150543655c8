use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{ApiError, ApiResult};
use super::types::{
    AutoResponse, ChatRequest, ChatResponse, ErrorBody, ProfileResponse, StateResponse,
};

/// The chat backend as seen by a session.
///
/// The four calls map one-to-one onto the backend's HTTP endpoints. The
/// session controller only talks to this trait, so tests can script a
/// backend without a server.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// `GET /api/state`
    async fn fetch_state(&self) -> ApiResult<StateResponse>;

    /// `POST /api/chat`
    async fn send_chat(&self, message: &str, auto: Option<bool>) -> ApiResult<ChatResponse>;

    /// `POST /api/profile/{name}`
    async fn set_profile(&self, name: &str) -> ApiResult<ProfileResponse>;

    /// `POST /api/auto/{0|1}`
    async fn set_auto(&self, enabled: bool) -> ApiResult<AutoResponse>;
}

/// HTTP implementation of [`Collaborator`] backed by `reqwest`.
pub struct HttpCollaborator {
    client: Client,
    base_url: String,
}

impl HttpCollaborator {
    /// Creates a client for the backend at `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Creates a client that gives up on requests after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into());
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_json<T: DeserializeOwned>(url: String, response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            let detail = ErrorBody::detail_from(&body);
            tracing::warn!(%url, %status, detail = detail.as_deref(), "backend request failed");
            return Err(ApiError::Status {
                url,
                status,
                detail,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(%url, error = %source, "backend sent an unreadable body");
            ApiError::Decode { url, source }
        })
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        Self::read_json(url, response).await
    }
}

#[async_trait]
impl Collaborator for HttpCollaborator {
    async fn fetch_state(&self) -> ApiResult<StateResponse> {
        let url = self.url("/api/state");
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        Self::read_json(url, response).await
    }

    async fn send_chat(&self, message: &str, auto: Option<bool>) -> ApiResult<ChatResponse> {
        let url = self.url("/api/chat");
        tracing::debug!(%url, ?auto, "POST");
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message, auto })
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        Self::read_json(url, response).await
    }

    async fn set_profile(&self, name: &str) -> ApiResult<ProfileResponse> {
        self.post_empty(&profile_path(name)).await
    }

    async fn set_auto(&self, enabled: bool) -> ApiResult<AutoResponse> {
        self.post_empty(&format!("/api/auto/{}", u8::from(enabled)))
            .await
    }
}

fn transport(url: &str, source: reqwest::Error) -> ApiError {
    tracing::warn!(%url, error = %source, "could not reach backend");
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Path of the profile endpoint, with `name` percent-encoded as one segment.
fn profile_path(name: &str) -> String {
    format!("/api/profile/{}", urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client = HttpCollaborator::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/state"), "http://localhost:8000/api/state");
    }

    #[test]
    fn test_base_url_with_prefix() {
        let client = HttpCollaborator::new("https://example.com/chat//");
        assert_eq!(client.url("/api/chat"), "https://example.com/chat/api/chat");
    }

    #[test]
    fn test_profile_path_plain() {
        assert_eq!(profile_path("trq_duro"), "/api/profile/trq_duro");
        assert_eq!(profile_path("debug"), "/api/profile/debug");
    }

    #[test]
    fn test_profile_path_encodes_one_segment() {
        assert_eq!(profile_path("a b/c"), "/api/profile/a%20b%2Fc");
        assert_eq!(profile_path("exploratório"), "/api/profile/explorat%C3%B3rio");
        assert_eq!(profile_path("../state"), "/api/profile/..%2Fstate");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = HttpCollaborator::new("http://127.0.0.1:9");
        let result = client.fetch_state().await;
        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }
}
