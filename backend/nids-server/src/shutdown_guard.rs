use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Lets an async task wait for, or poll, the shutdown signal.
///
/// Built on a watch channel, so a guard created after shutdown was
/// triggered still observes it.
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        // An Err means the coordinator is gone, which also ends the wait
        let _ = self.shutdown_rx.wait_for(|triggered| *triggered).await;
    }

    /// Non-blocking check
    pub fn poll_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
