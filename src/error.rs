//! Error types for the aggregation service
//!
//! Provides the failure taxonomy carried as values from the upstream
//! gateway and aggregator up to the HTTP boundary, using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the aggregation service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Malformed input, rejected before any network or cache activity
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Transport-level upstream failure (connection refused, timeout)
    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream answered with a non-2xx status and a provider message
    #[error("Upstream provider rejected the request ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    /// The requested listing page is structurally absent
    #[error("No page found")]
    NoPageFound,

    /// A listing entry references a genre id missing from the catalog
    #[error("Unknown genre id: {0}")]
    GenreResolution(i64),

    /// Local relational store failure
    #[error("Local store error: {0}")]
    LocalStore(String),
}

impl ApiError {
    // == Kind ==
    /// Stable machine-readable kind for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::UpstreamUnavailable(_) => "upstream_unavailable",
            ApiError::UpstreamRejected { .. } => "upstream_rejected",
            ApiError::NoPageFound => "no_page_found",
            ApiError::GenreResolution(_) => "genre_resolution",
            ApiError::LocalStore(_) => "local_store",
        }
    }

    // == Status Code ==
    /// Transport status this failure maps to at the HTTP boundary.
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            // A provider 404 means the movie itself does not exist
            ApiError::UpstreamRejected { status: 404, .. } => StatusCode::NOT_FOUND,
            ApiError::UpstreamRejected { .. } => StatusCode::BAD_GATEWAY,
            ApiError::NoPageFound => StatusCode::NOT_FOUND,
            ApiError::GenreResolution(_) => StatusCode::BAD_GATEWAY,
            ApiError::LocalStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "status": "fail",
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the aggregation service.
pub type Result<T> = std::result::Result<T, ApiError>;
