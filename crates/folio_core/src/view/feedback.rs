//! Transient "copied" confirmation.

use crate::config::DEFAULT_COPIED_WINDOW_MS;
use crate::view::timer::SingleShotTimer;
use std::time::{Duration, Instant};

/// Copied indicator with its auto-revert timer.
///
/// Last copy wins: a copy inside the window re-arms the same timer instead
/// of stacking a second revert.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied: bool,
    window: Duration,
    revert: SingleShotTimer,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            copied: false,
            window,
            revert: SingleShotTimer::new(),
        }
    }

    /// Turns the indicator on and (re)arms the revert.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied = true;
        self.revert.arm(now + self.window);
    }

    /// Forces the indicator off after a failed copy.
    pub fn mark_failed(&mut self) {
        self.copied = false;
        self.revert.cancel();
    }

    /// Applies a due revert. Returns `true` when the indicator changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.revert.fire_if_due(now).is_some() && self.copied {
            self.copied = false;
            return true;
        }
        false
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Pending revert deadline, for hosts that schedule a wake-up.
    pub fn revert_deadline(&self) -> Option<Instant> {
        self.revert.deadline()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPIED_WINDOW_MS))
    }
}
