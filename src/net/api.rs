//! REST client for the profiles API.
//!
//! Thin `reqwest` wrapper over two endpoints:
//! - `GET    {base}/api/profiles`      -> `[Profile]`
//! - `DELETE {base}/api/profiles/{id}` -> any 2xx
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies map to
//! distinct [`ApiError`] variants. The response body of a failed call is kept
//! so callers can log what the server said. Body parsing lives in
//! [`parse_profiles`] so it can be tested without a server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::Url;

use super::types::Profile;
use crate::config::ApiTimeouts;

/// Collection path, appended to the configured base URL.
pub const PROFILES_PATH: &str = "/api/profiles";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by profile API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The base URL plus endpoint path did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request could not be completed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The server answered with a non-success status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Best description of the failure for logs: the server's response body
    /// when it sent one, otherwise the error message itself.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::ApiResponse { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Remote source of profile records.
///
/// [`ProfileApi`] is the HTTP implementation; tests substitute an in-memory
/// store.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch every profile.
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError>;

    /// Delete one profile by identifier.
    async fn delete_profile(&self, id: &str) -> Result<(), ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ProfileApi {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileApi {
    /// Build a client for `base_url` (trailing slashes are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        let raw = format!("{}{PROFILES_PATH}", self.base_url);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// `{base}/api/profiles/{id}` with `id` encoded as a single path segment.
    fn profile_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::ApiResponse { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ProfileStore for ProfileApi {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "fetching profiles");
        let text = self.send(self.http.get(url)).await?;
        parse_profiles(&text)
    }

    async fn delete_profile(&self, id: &str) -> Result<(), ApiError> {
        let url = self.profile_url(id)?;
        tracing::debug!(%url, "deleting profile");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

/// Parse a `GET /api/profiles` body.
///
/// # Errors
///
/// Returns [`ApiError::ApiParse`] if the body is not a JSON array of profiles.
pub fn parse_profiles(text: &str) -> Result<Vec<Profile>, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::ApiParse(e.to_string()))
}
