//! Cache Store Module
//!
//! Keyed storage for raw upstream payloads with TTL expiry and
//! least-recently-used eviction once capacity is reached.

use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Payload store keyed by canonical upstream request, with LRU eviction
/// and expiry-on-read.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Access order, least recently used at the front
    order: VecDeque<String>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore bounded to `max_entries` payloads.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Insert ==
    /// Stores a payload under `key` with an optional TTL.
    ///
    /// Overwrites any existing entry for the key and resets its deadline.
    /// At capacity, the least recently used entry is evicted first.
    pub fn insert(&mut self, key: String, payload: Value, ttl: Option<u64>) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(payload, ttl));
        self.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a payload by key if present and unexpired.
    ///
    /// Expired entries are removed on read and counted as misses, so a
    /// caller never observes a payload past its freshness deadline.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.order.retain(|k| k != key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let payload = entry.payload.clone();
                self.stats.record_hit();
                self.touch(key);
                Some(payload)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Evict Expired ==
    /// Removes all entries past their deadline.
    ///
    /// Returns the number of entries removed.
    pub fn evict_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.retain(|k| k != key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves `key` to the most-recently-used position.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_back(key.to_string());
    }
}
