//! Single-slot debounce timer.
//!
//! At most one timer is armed at a time. Re-arming aborts the previous task
//! and bumps the sequence number, so a task that already woke up but has not
//! yet committed sees a stale sequence in [`Debouncer::finish`] and backs off.

use std::time::Duration;
use tokio::task::JoinHandle;

pub(crate) struct Debouncer {
    delay: Duration,
    seq: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: 0,
            pending: None,
        }
    }

    /// Discards any armed timer and arms a new one. `on_fire` receives the
    /// sequence number it must present to [`finish`](Self::finish).
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn rearm<F>(&mut self, on_fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        let seq = self.seq;
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(seq);
        }));
    }

    /// Returns whether a timer was armed.
    pub(crate) fn cancel(&mut self) -> bool {
        self.seq = self.seq.wrapping_add(1);
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claims the firing for `seq`. False when the timer was re-armed or
    /// cancelled after that task was spawned.
    pub(crate) fn finish(&mut self, seq: u64) -> bool {
        if self.pending.is_none() || self.seq != seq {
            return false;
        }
        // The task is the one running this call; dropping the handle detaches it.
        self.pending = None;
        true
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
