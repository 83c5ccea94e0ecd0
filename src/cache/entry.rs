//! Cache Entry Module
//!
//! Defines the structure of a single cached upstream payload with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A raw upstream payload together with its freshness deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw JSON payload as returned by the provider
    pub payload: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Freshness deadline (Unix milliseconds), None = cached until evicted
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with an optional TTL.
    ///
    /// # Arguments
    /// * `payload` - The raw upstream payload to store
    /// * `ttl_seconds` - Optional TTL in seconds
    pub fn new(payload: Value, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now + (ttl * 1000));

        Self {
            payload,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has passed its freshness deadline.
    ///
    /// An entry is expired when the current time is greater than or equal to
    /// the deadline. Entries without a deadline never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
