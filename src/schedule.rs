//! One-shot delayed action with cancel/reschedule semantics.
//!
//! DESIGN
//! ======
//! The timer is a spawned tokio task that sleeps and then runs the action.
//! Rescheduling aborts the pending task before arming a new one. The action is
//! synchronous, so once the sleep completes it runs to completion: an abort
//! either lands before the action starts or after it is done, never midway.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// A single debounce slot. Holds no business state.
#[derive(Debug, Default)]
pub struct ScheduledTask {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ScheduledTask {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay` unless cancelled first. Replaces any timer
    /// that is still pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending timer, if any. Idempotent.
    pub fn cancel(&self) {
        if let Some(previous) = self.lock().take() {
            previous.abort();
        }
    }

    /// `true` while a timer is armed and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
