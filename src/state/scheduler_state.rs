//! Refresh scheduler state: a single slot for the pending timer

use tokio::task::JoinHandle;

/// At most one pending refresh timer exists at a time. Every arm or cancel
/// bumps `generation`, so a timer that already woke up can tell it has been
/// superseded.
#[derive(Debug, Default)]
pub struct SchedulerState {
    pending: Option<JoinHandle<()>>,
    generation: u64,
    initialized: bool,
}

impl SchedulerState {
    /// Create an idle scheduler that has never been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a refresh timer is waiting to fire
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the host's first start has happened
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Mark the first start; returns false if it already happened
    pub fn initialize(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Cancel the pending timer without firing it. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Reserve a fresh generation for a new timer, cancelling the old one
    pub fn next_generation(&mut self) -> u64 {
        self.cancel();
        self.generation
    }

    /// Store the handle of the timer armed for `generation`
    pub fn set_pending(&mut self, generation: u64, handle: JoinHandle<()>) {
        if self.is_current(generation) {
            self.pending = Some(handle);
        } else {
            handle.abort();
        }
    }

    /// Claim the tick for a timer that just fired. Returns false when the
    /// timer was cancelled or replaced after it was armed.
    pub fn begin_tick(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        // The handle belongs to the task that is firing; dropping it detaches.
        self.pending = None;
        true
    }
}

impl Drop for SchedulerState {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
