//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Sweep: Removes entries older than the cache interval on a fixed period

mod sweep;

pub use sweep::{spawn_sweep_task, sweep_expired, SweepHandle};
