// ── Player lifecycle ──
//
// Full lifecycle management for one display: seed state from the local
// cache, synchronize against the directory service, then keep two
// independent timers running -- rotation advance every `duration` seconds
// and content+configuration resync every `refresh` seconds.
//
// The two timers are deliberately not mutually exclusive. Refresh runs on
// the order of minutes, rotation on the order of seconds; if they ever
// interleave, the last SetProperties/SetCurrent wins, which is acceptable
// for an idempotent content feed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::store::RotationStore;
use crate::trigger::RefreshTrigger;

/// Start/stop wrapper around a [`RotationStore`] and its timers.
pub struct Player {
    store: Arc<RotationStore>,
    triggers: Mutex<Vec<RefreshTrigger>>,
}

impl Player {
    /// Create a player. Does not start anything -- call
    /// [`start()`](Self::start) to synchronize and arm the timers.
    pub fn new(store: Arc<RotationStore>) -> Self {
        Self {
            store,
            triggers: Mutex::new(Vec::new()),
        }
    }

    /// Bring the display up.
    ///
    /// Surfaces cached content first so something shows even when the
    /// network is down, then synchronizes configuration and content, then
    /// arms the rotation and resync timers from the freshly synced periods.
    pub async fn start(&self, branch_id: Option<u64>, tv_id: Option<String>) {
        self.store.load_cached_properties().await;
        self.store.synchronize_configuration(branch_id, tv_id).await;
        self.store.refresh_properties().await;

        let state = self.store.snapshot();
        info!(
            duration = state.duration,
            refresh = state.refresh,
            properties = state.properties.len(),
            "player started"
        );

        let mut triggers = self.triggers.lock().await;

        let store = Arc::clone(&self.store);
        triggers.push(RefreshTrigger::spawn(
            Duration::from_secs(state.duration),
            move || {
                let store = Arc::clone(&store);
                async move {
                    // The advance routine is the only one that surfaces an
                    // error; it ends here, logged, with the previous
                    // property still showing.
                    if let Err(e) = store.advance().await {
                        warn!(error = %e, "rotation advance failed");
                    }
                }
            },
        ));

        let store = Arc::clone(&self.store);
        triggers.push(RefreshTrigger::spawn(
            Duration::from_secs(state.refresh),
            move || {
                let store = Arc::clone(&store);
                async move {
                    let (branch_id, tv_id) = {
                        let state = store.snapshot();
                        (state.branch_id, state.tv_id)
                    };
                    store.synchronize_configuration(branch_id, tv_id).await;
                    store.refresh_properties().await;
                }
            },
        ));
    }

    /// Disarm both timers and wait for them to wind down.
    ///
    /// After this returns, no further state mutation originates from the
    /// player.
    pub async fn stop(&self) {
        let mut triggers = self.triggers.lock().await;
        for trigger in triggers.drain(..) {
            trigger.stop().await;
        }
        info!("player stopped");
    }
}
