// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing for rapid input events.
//!
//! Each [`Debouncer::push`] replaces whatever was pending and re-arms the
//! timer, so only the most recent value within any wait window is delivered.
//! Time is passed in explicitly; the application feeds it from the periodic
//! tick subscription, and tests feed synthetic instants.

use std::time::{Duration, Instant};

/// Coalesces bursts of values into a single delayed delivery of the latest one.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            deadline: None,
        }
    }

    /// Records `value` as the pending delivery and restarts the wait window.
    ///
    /// Any previously pending value is discarded, never delivered.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.wait);
    }

    /// Yields the pending value once the wait window has elapsed.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// pending. Delivers at most once per armed window.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Whether a delivery is currently scheduled.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}
