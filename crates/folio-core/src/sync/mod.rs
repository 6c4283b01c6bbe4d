//! Trailing-edge debounce for remote saves.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Owns the single pending save timer.
///
/// Every [`DebouncedSync::schedule`] call aborts the previous timer and starts
/// a new one, so at most one timer exists at a time. When a timer elapses the
/// save itself is spawned as a separate task: later schedules and
/// [`DebouncedSync::cancel`] only ever abort a timer that is still waiting,
/// never a save that is already in flight.
#[derive(Debug)]
pub struct DebouncedSync {
    quiet_period: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedSync {
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            timer: Mutex::new(None),
        }
    }

    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// (Re)start the quiet period; `save` runs once it elapses undisturbed.
    pub fn schedule<F>(&self, save: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet_period = self.quiet_period;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tokio::spawn(save);
        });

        let previous = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(timer);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Drop the pending timer, if any.
    pub fn cancel(&self) {
        if let Some(timer) = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            timer.abort();
        }
    }

    /// Whether a timer is still waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for DebouncedSync {
    fn drop(&mut self) {
        self.cancel();
    }
}
