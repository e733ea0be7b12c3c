//! TTL Cache Handle
//!
//! The shareable cache handed to every caller: a guarded [`CacheStore`] plus
//! the background sweep that expires its entries.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::tasks::{spawn_sweep_task, SweepHandle};

// == Cache ==
/// Time-bounded, concurrency-safe byte cache keyed by string.
///
/// Cloning is cheap and yields another handle to the same store. Entries live
/// until a sweep finds them older than [`interval`](Cache::interval); lookups
/// never check age, so a value may be served for up to one extra sweep period
/// after it logically expired.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    sweep: Arc<Mutex<Option<SweepHandle>>>,
    interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let sweep = spawn_sweep_task(store.clone(), interval);

        Self {
            store,
            sweep: Arc::new(Mutex::new(Some(sweep))),
            interval,
        }
    }

    /// Creates a cache using the configured interval.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_interval())
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its expiration window.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();

        let mut store = self.store.write().await;
        store.set(key, value);
    }

    // == Get ==
    /// Returns the bytes stored under `key`, or `None` if absent.
    ///
    /// An empty payload is returned as `Some` with zero length.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == Stop ==
    /// Stops the background sweep and waits for it to exit.
    ///
    /// The cache keeps serving `get` and `add` afterwards, but nothing expires.
    /// Calling this more than once is a no-op.
    pub async fn stop(&self) {
        let handle = self.sweep.lock().await.take();

        if let Some(handle) = handle {
            handle.stop().await;
            debug!("Cache sweep stopped");
        }
    }

    /// Returns true while the background sweep is still running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweep
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Returns the configured entry lifetime and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current number of entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns a snapshot of lookup and sweep statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(50);

    #[tokio::test(start_paused = true)]
    async fn test_miss_then_hit() {
        let cache = Cache::new(INTERVAL);

        assert!(cache.get("k").await.is_none());

        cache.add("k", "v").await;
        assert_eq!(cache.get("k").await, Some(Bytes::from_static(b"v")));

        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_returns_latest() {
        let cache = Cache::new(INTERVAL);

        cache.add("k", "v1").await;
        cache.add("k", "v2").await;

        assert_eq!(cache.get("k").await, Some(Bytes::from_static(b"v2")));
        assert_eq!(cache.len().await, 1);
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let cache = Cache::new(INTERVAL);

        cache.add("k1", "v1").await;

        assert!(cache.get("k2").await.is_none());
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_present_but_empty_is_not_absent() {
        let cache = Cache::new(INTERVAL);

        cache.add("empty", Vec::new()).await;

        let value = cache.get("empty").await;
        assert_eq!(value, Some(Bytes::new()));
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_within_two_intervals() {
        let cache = Cache::new(INTERVAL);
        cache.add("u1", "a").await;

        tokio::time::sleep(INTERVAL * 2 + Duration::from_millis(1)).await;

        assert!(cache.get("u1").await.is_none());
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_read_between_sweeps() {
        let cache = Cache::new(INTERVAL);
        cache.add("u1", "a").await;

        // Older than one interval, but the only sweep so far saw it at exactly 50ms
        tokio::time::sleep(INTERVAL + INTERVAL / 2).await;

        assert_eq!(cache.get("u1").await, Some(Bytes::from_static(b"a")));
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_refreshes_expiration_window() {
        let cache = Cache::new(INTERVAL);
        cache.add("u1", "a").await;

        tokio::time::sleep(INTERVAL + INTERVAL / 2).await;
        cache.add("u1", "b").await;

        // Sweep at 100ms sees an entry only 25ms old
        tokio::time::sleep(INTERVAL).await;

        assert_eq!(cache.get("u1").await, Some(Bytes::from_static(b"b")));
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_expiration() {
        let cache = Cache::new(INTERVAL);
        cache.add("u1", "a").await;

        cache.stop().await;
        assert!(!cache.is_sweeping().await);

        tokio::time::sleep(INTERVAL * 10).await;
        assert!(cache.get("u1").await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let cache = Cache::new(INTERVAL);

        cache.stop().await;
        cache.stop().await;

        assert!(!cache.is_sweeping().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_store_and_sweep() {
        let cache = Cache::new(INTERVAL);
        let other = cache.clone();

        other.add("shared", "v").await;
        assert!(cache.get("shared").await.is_some());

        other.stop().await;
        assert!(!cache.is_sweeping().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_caches_are_isolated() {
        let a = Cache::new(INTERVAL);
        let b = Cache::new(INTERVAL);

        a.add("k", "v").await;

        assert!(b.get("k").await.is_none());
        a.stop().await;
        b.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_from_config() {
        let config = Config {
            cache_interval: 5,
            ..Config::default()
        };
        let cache = Cache::from_config(&config);

        assert_eq!(cache.interval(), Duration::from_secs(5));
        assert!(cache.is_sweeping().await);
        cache.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_reflect_activity() {
        let cache = Cache::new(INTERVAL);
        cache.add("k", "v").await;
        let _ = cache.get("k").await;
        let _ = cache.get("missing").await;

        tokio::time::sleep(INTERVAL * 2 + Duration::from_millis(1)).await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.expired, 1);
        assert!(cache.is_empty().await);
        cache.stop().await;
    }
}
