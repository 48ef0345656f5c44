//! The periodic cleanup sweep: evicts empty rooms and refreshes the lobby.

use std::sync::Arc;
use std::time::Duration;

use parlor_game::GameRules;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::Coordinator;

/// Handle to a running sweep task.
///
/// Dropping the handle also stops the sweep (the shutdown channel
/// closes), but [`shutdown`](Self::shutdown) waits for the task to
/// actually finish — use it on process teardown for a deterministic stop.
pub struct SweepHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Signals the sweep to stop and waits for it.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawns the sweep: every `interval`, evict rooms that are empty at that
/// instant, then push the refreshed room list to the lobby.
///
/// The first tick is delayed by a random jitter of up to a tenth of the
/// interval so coordinators started together don't sweep in lockstep.
pub fn spawn_sweep<G: GameRules>(
    coordinator: Arc<Coordinator<G>>,
    interval: Duration,
) -> SweepHandle {
    let (shutdown, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
        let jitter = interval.mul_f64(rand::rng().random_range(0.0..0.1));
        let first = tokio::time::Instant::now() + interval + jitter;
        let mut ticker = tokio::time::interval_at(first, interval);

        tracing::debug!(interval_ms = interval.as_millis() as u64, "cleanup sweep started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = coordinator.rooms().cleanup_empty();
                    if removed > 0 {
                        tracing::info!(removed, "sweep evicted empty rooms");
                    }
                    coordinator.broadcast_room_list();
                }
                // Fires on an explicit shutdown or when the handle drops.
                _ = stopped.changed() => break,
            }
        }

        tracing::debug!("cleanup sweep stopped");
    });

    SweepHandle { shutdown, task }
}
