//! Upstream Client Module
//!
//! Issues authenticated GET requests to the metadata provider. Never called
//! directly by handlers; every call goes through the cache gateway.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;
use crate::upstream::RequestDescriptor;

// == Upstream Error ==
/// Typed outcome of a failed upstream call, propagated as a value so the
/// aggregator can decide per-call whether a failure is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// Transport-level failure, including timeouts
    #[error("{0}")]
    Unavailable(String),

    /// Non-2xx provider response with its message
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Unavailable(message) => ApiError::UpstreamUnavailable(message),
            UpstreamError::Rejected { status, message } => {
                ApiError::UpstreamRejected { status, message }
            }
        }
    }
}

// == Upstream Client ==
/// Authenticated HTTP client for the metadata provider.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl UpstreamClient {
    // == Constructor ==
    /// Builds a client with the given base URL, bearer credential, and a
    /// timeout bounding every upstream call.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout_secs: u64,
    ) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_token: api_token.into(),
        })
    }

    // == Get Json ==
    /// Performs the GET described by `request` and returns the raw JSON
    /// payload.
    ///
    /// Timeouts and connection failures map to `Unavailable`; non-2xx
    /// responses map to `Rejected` carrying the provider's message.
    pub async fn get_json(&self, request: &RequestDescriptor) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, request.path());

        let response = self
            .http
            .get(&url)
            .query(request.query())
            .bearer_auth(&self.api_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                message: provider_message(body.as_ref(), status),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Unavailable(format!("unreadable provider payload: {}", e)))
    }
}

// == Utility Functions ==
/// Extracts the provider's `status_message` from an error body, falling
/// back to the HTTP status line when the body carries none.
fn provider_message(body: Option<&Value>, status: StatusCode) -> String {
    body.and_then(|v| v.get("status_message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("upstream request failed")
                .to_string()
        })
}
