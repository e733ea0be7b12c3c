//! Expiration Sweep Task
//!
//! Background task that periodically removes entries older than the cache interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Smallest period the sweep timer will tick at.
///
/// `tokio::time::interval` rejects a zero period; a zero-length cache interval
/// still expires entries on every sweep, it just sweeps at this rate.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Runs one sweep pass over `store`.
///
/// The scan runs under the read lock and collects keys older than `interval`
/// relative to a cutoff taken at the start of the pass. The marked keys are
/// then removed under the write lock, skipping any that were rewritten in
/// between. Returns the number of entries removed.
pub async fn sweep_expired(store: &RwLock<CacheStore>, interval: Duration) -> usize {
    let now = Instant::now();

    let marked = store.read().await.expired_keys(now, interval);

    let mut guard = store.write().await;
    guard.remove_expired(&marked, now, interval)
}

// == Sweep Handle ==
/// Control handle for a running sweep task.
///
/// Dropping the handle closes the shutdown channel, which also ends the task.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Signals the task to stop and waits for it to exit.
    pub async fn stop(self) {
        // The task may already be gone if the runtime is shutting down
        let _ = self.shutdown_tx.send(()).await;

        if let Err(err) = self.task.await {
            if err.is_panic() {
                warn!("Sweep task panicked: {}", err);
            }
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a background task that sweeps `store` every `interval`.
///
/// The first sweep happens one full interval after this call. The task holds
/// only the store, so it never keeps a [`Cache`](crate::cache::Cache) handle
/// alive on its own.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.stop().await;
/// ```
pub fn spawn_sweep_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> SweepHandle {
    let period = interval.max(MIN_SWEEP_PERIOD);
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let task = tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = sweep_expired(&store, interval).await;

                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }

        info!("Cache sweep task stopped");
    });

    SweepHandle { shutdown_tx, task }
}
