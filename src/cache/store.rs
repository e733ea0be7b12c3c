//! Cache Store Module
//!
//! The guarded map behind a [`Cache`](crate::cache::Cache). All methods are
//! synchronous and expect the caller to hold the appropriate lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to entry storage with hit/miss and sweep accounting.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: StatsCounters,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, stamping it with the current instant.
    ///
    /// Replacing an entry starts a new expiration window for it.
    pub fn set(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a view of the stored bytes for `key`.
    ///
    /// Age is not checked here: an entry past its interval is still returned
    /// until a sweep removes it.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Scan Phase ==
    /// Collects the keys of every entry older than `interval` as of `now`.
    ///
    /// Only needs shared access, so lookups can proceed concurrently.
    pub fn expired_keys(&self, now: Instant, interval: Duration) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, interval))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Delete Phase ==
    /// Removes the marked keys that are still expired and records the sweep.
    ///
    /// A key rewritten between the scan and this call carries a fresh
    /// `created_at` and is kept. Returns the number of entries removed.
    pub fn remove_expired(&mut self, marked: &[String], now: Instant, interval: Duration) -> usize {
        let mut removed = 0;

        for key in marked {
            let still_expired = self
                .entries
                .get(key)
                .is_some_and(|entry| entry.is_expired(now, interval));

            if still_expired {
                self.entries.remove(key);
                removed += 1;
            }
        }

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
