//! Delayed callbacks that die with their owner.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinSet;

/// Runs callbacks after a delay on the tokio runtime.
///
/// Dropping the scheduler, or calling [`cancel_all`](Self::cancel_all),
/// aborts every callback that has not fired yet.
pub struct ReplyScheduler {
    runtime: Handle,
    tasks: JoinSet<()>,
}

impl ReplyScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            tasks: JoinSet::new(),
        }
    }

    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.spawn_on(
            async move {
                tokio::time::sleep(delay).await;
                callback();
            },
            &self.runtime,
        );
    }

    /// Drop bookkeeping for callbacks that already ran.
    pub fn reap(&mut self) {
        while self.tasks.try_join_next().is_some() {}
    }

    /// Callbacks scheduled and not yet reaped.
    pub fn scheduled(&self) -> usize {
        self.tasks.len()
    }

    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(count = self.tasks.len(), "cancelling scheduled replies");
        }
        self.tasks.abort_all();
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
