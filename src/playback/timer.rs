//! One-shot playback timer
//!
//! The controller arms the timer after each applied step, so the delay is
//! measured from tick completion. Firing or cancelling disarms it; at most one
//! deadline is pending at a time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Timer { deadline: None }
    }

    /// Schedule a single fire `delay` after `from`, replacing any pending one
    pub fn arm(&mut self, from: Instant, delay: Duration) {
        self.deadline = Some(from + delay);
    }

    /// Drop the pending fire, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending fire if its deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
