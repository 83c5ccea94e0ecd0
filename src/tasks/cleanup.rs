//! TTL Cleanup Task
//!
//! Background task that periodically removes cached payloads past their
//! freshness deadline, so the store does not fill up with stale entries
//! between reads.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the configured interval
/// between sweeps. It acquires a write lock on the cache store to remove
/// expired entries.
///
/// # Arguments
/// * `cache` - shared reference to the cache store
/// * `cleanup_interval_secs` - interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache expiry sweep with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.evict_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} stale payloads", removed);
            } else {
                debug!("Expiry sweep: nothing expired");
            }
        }
    })
}
