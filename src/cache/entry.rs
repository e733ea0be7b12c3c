//! Cache Entry Module
//!
//! Defines a single stored payload together with its creation time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored response payload and the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Bytes,
    /// When the entry was written (monotonic, follows tokio's clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` precedes the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than one full `interval` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still live. It only becomes eligible for removal once it is strictly
    /// older than the interval.
    pub fn is_expired(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"payload"));

        assert_eq!(entry.value, Bytes::from_static(b"payload"));
        assert_eq!(entry.age(Instant::now()), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_empty_value() {
        let entry = CacheEntry::new(Bytes::new());
        assert!(entry.value.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_age_advances_with_clock() {
        let entry = CacheEntry::new(Bytes::from_static(b"a"));

        tokio::time::advance(Duration::from_millis(30)).await;

        assert_eq!(entry.age(Instant::now()), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_age_before_creation_saturates() {
        let earlier = Instant::now();
        tokio::time::advance(Duration::from_millis(10)).await;
        let entry = CacheEntry::new(Bytes::from_static(b"a"));

        assert_eq!(entry.age(earlier), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let interval = Duration::from_millis(50);
        let entry = CacheEntry::new(Bytes::from_static(b"a"));

        let at_boundary = entry.created_at + interval;
        assert!(
            !entry.is_expired(at_boundary, interval),
            "Entry exactly one interval old should still be live"
        );

        let past_boundary = at_boundary + Duration::from_millis(1);
        assert!(entry.is_expired(past_boundary, interval));
    }
}
