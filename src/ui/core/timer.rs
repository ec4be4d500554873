use super::actions::Action;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One-shot delayed action owned by a screen.
///
/// The scheduled task is aborted when the owner is dropped, so a screen
/// that has been torn down can never fire a stale navigation.
pub struct DelayedAction {
    handle: JoinHandle<()>,
}

impl DelayedAction {
    pub fn schedule(
        delay: Duration,
        action: Action,
        sender: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(action);
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
