// ── Periodic refresh trigger ──
//
// An owned, cancelable scheduled task. `stop` disarms future firings and
// joins the task; an in-flight callback invocation runs to completion --
// callers must stop the trigger before assuming no further state mutation
// will come from it.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Fires an async callback on a fixed period until stopped.
pub struct RefreshTrigger {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RefreshTrigger {
    /// Spawn a trigger firing `action` every `period`.
    ///
    /// The first firing happens one full period after the spawn; callers
    /// wanting an immediate run invoke the action themselves first.
    pub fn spawn<F, Fut>(period: Duration, mut action: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // consume the immediate first tick

            loop {
                tokio::select! {
                    biased;
                    () = task_cancel.cancelled() => break,
                    _ = interval.tick() => action().await,
                }
            }
        });

        Self { cancel, handle }
    }

    /// Stop future firings and wait for the task to wind down.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}
