//! Aggregator Module
//!
//! Orchestrates the gateway calls and the local join query needed to answer
//! one client request, then merges the branches into the externally shaped
//! payload. All upstream traffic goes through the injected cache gateway;
//! the aggregator never touches the cache store or the HTTP client itself.

mod detail;
mod listing;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::db::ReviewSource;
use crate::error::{ApiError, Result};
use crate::upstream::CacheGateway;

pub use listing::{ListingQuery, SORT_TOKENS};

// == Image URL Bases ==
/// Poster rendition served to clients
const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w300_and_h450_bestv2";
/// Cast/crew profile rendition served to clients
const PROFILE_BASE: &str = "https://image.tmdb.org/t/p/w300_and_h300_bestv2";

// == Aggregator ==
/// Merges provider data and local rows into handler-facing payloads.
pub struct Aggregator {
    gateway: Arc<CacheGateway>,
    reviews: Arc<dyn ReviewSource>,
}

impl Aggregator {
    // == Constructor ==
    /// Creates an aggregator over the process-wide gateway and the local
    /// review source.
    pub fn new(gateway: Arc<CacheGateway>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self { gateway, reviews }
    }
}

// == Shaping Helpers ==
/// Resolves a provider poster path to an absolute URL, or null when the
/// provider supplied none.
fn poster_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{}{}", POSTER_BASE, p))
}

/// Resolves a provider profile path to an absolute URL, or null when the
/// provider supplied none.
fn profile_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{}{}", PROFILE_BASE, p))
}

/// Decodes a raw gateway payload into its typed document.
///
/// A 2xx payload that does not match the expected shape means the provider
/// answered unusably, which callers treat like an unavailable upstream.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::UpstreamUnavailable(format!("malformed provider payload: {}", e)))
}
