//! Cache Gateway Module
//!
//! Cache-aside front over the upstream client: every provider call in the
//! service goes through `CacheGateway::fetch`, which absorbs upstream
//! latency for repeated reads of the same resource.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::upstream::{RequestDescriptor, UpstreamClient, UpstreamError};

// == Cache Gateway ==
/// Wraps the upstream client with cache-aside semantics over the shared
/// cache store. Constructed once at startup and passed explicitly to the
/// aggregator.
pub struct CacheGateway {
    client: UpstreamClient,
    cache: Arc<RwLock<CacheStore>>,
    ttl: Option<u64>,
}

impl CacheGateway {
    // == Constructor ==
    /// Creates a gateway over `client` backed by `cache`.
    ///
    /// # Arguments
    /// * `ttl` - freshness window in seconds for stored payloads; None
    ///   caches until the store evicts the entry
    pub fn new(client: UpstreamClient, cache: Arc<RwLock<CacheStore>>, ttl: Option<u64>) -> Self {
        Self { client, cache, ttl }
    }

    // == Fetch ==
    /// Resolves `request` cache-aside.
    ///
    /// An unexpired entry for the request's key is returned directly with
    /// no upstream call. On miss the upstream client is invoked; the full
    /// payload is stored before returning. Failures are returned as values
    /// and never cached, so the next identical request retries upstream.
    pub async fn fetch(&self, request: &RequestDescriptor) -> Result<Value, UpstreamError> {
        let key = request.cache_key();

        // Write lock even on the read path: hits update access order and stats
        if let Some(payload) = self.cache.write().await.get(&key) {
            debug!(key = %key, "cache hit");
            return Ok(payload);
        }

        debug!(key = %key, "cache miss, calling upstream");
        let payload = self.client.get_json(request).await?;

        self.cache
            .write()
            .await
            .insert(key, payload.clone(), self.ttl);

        Ok(payload)
    }
}
