//! Cache Module
//!
//! Provides a time-bounded in-memory byte cache with periodic expiration.

mod entry;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::Cache;
