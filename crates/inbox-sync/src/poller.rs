//! Recurring snapshot poller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::source::InboxSource;
use crate::state::{should_adopt, InboxState};
use crate::SyncError;

/// How many messages each poll tick requests.
pub const DEFAULT_POLL_LIMIT: usize = 200;

/// Spawner for the recurring poll task.
pub struct SyncPoller;

impl SyncPoller {
    /// Start polling `source` on a fixed interval, adopting fresh snapshots
    /// into `state` per [`should_adopt`].
    ///
    /// The adoption decision is made against the state as it is at decision
    /// time, under the lock, never against a snapshot captured when the tick
    /// started. A failed tick is logged and skipped; the next interval
    /// retries naturally.
    pub fn spawn<S>(source: S, state: Arc<Mutex<InboxState>>, interval: Duration) -> SyncHandle
    where
        S: InboxSource + 'static,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let alive = Arc::new(AtomicBool::new(true));
        let liveness = alive.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval fires immediately; the
            // initial load is the loader's job, so skip it.
            ticker.tick().await;

            info!("Sync poller started (interval {:?})", interval);

            loop {
                tokio::select! {
                    biased;

                    _ = stop_rx.changed() => {
                        info!("Sync poller stopping");
                        break;
                    }

                    _ = ticker.tick() => {
                        if !liveness.load(Ordering::SeqCst) {
                            break;
                        }
                        match poll_once(&source, &state, &liveness).await {
                            Ok(true) => debug!("Adopted new snapshot"),
                            Ok(false) => debug!("No-op tick"),
                            Err(e) => warn!("Poll tick failed, skipping: {}", e),
                        }
                    }
                }
            }
        });

        SyncHandle {
            stop_tx,
            alive,
            task,
        }
    }
}

async fn poll_once<S: InboxSource>(
    source: &S,
    state: &Mutex<InboxState>,
    alive: &AtomicBool,
) -> Result<bool, SyncError> {
    let incoming = source.fetch_messages(DEFAULT_POLL_LIMIT, 0).await?;
    let contacts = source.fetch_contacts().await?;

    // The view may have torn down while the fetch was in flight; a stale
    // continuation must not touch state.
    if !alive.load(Ordering::SeqCst) {
        debug!("Discarding poll result after teardown");
        return Ok(false);
    }

    let mut state = state.lock().await;
    if should_adopt(state.snapshot(), &incoming) {
        state.adopt(incoming, &contacts);
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Handle to a running poller.
pub struct SyncHandle {
    stop_tx: watch::Sender<bool>,
    alive: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Stop the poller and wait for the task to finish. The liveness flag
    /// drops first, so a tick already in flight discards its result instead
    /// of mutating state.
    pub async fn shutdown(self) {
        self.alive.store(false, Ordering::SeqCst);
        let _ = self.stop_tx.send(true);
        let _ = self.task.await;
    }

    /// Whether the poller is still allowed to mutate state.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}
