//! Clock and single-shot timer primitives.
//!
//! # Responsibility
//! - Give hosts one cancelable, re-armable deadline per widget.
//! - Let tests drive time explicitly through [`ManualClock`].
//!
//! # Invariants
//! - A timer holds at most one pending deadline; arming replaces it.
//! - Every arm bumps the generation, so callbacks scheduled for an older
//!   arm can tell they are stale via [`SingleShotTimer::is_current`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Time source for view-state transitions.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time source used by hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic tests and replay.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves time forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifies one arm of a [`SingleShotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// One cancelable deadline.
#[derive(Debug, Clone, Default)]
pub struct SingleShotTimer {
    deadline: Option<Instant>,
    generation: u64,
}

impl SingleShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer for `deadline`, replacing any pending one.
    pub fn arm(&mut self, deadline: Instant) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(deadline);
        TimerToken(self.generation)
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether `token` belongs to the still-pending arm.
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.deadline.is_some() && token.0 == self.generation
    }

    /// Fires and disarms the timer when its deadline has passed.
    ///
    /// Returns the token of the arm that fired.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<TimerToken> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(TimerToken(self.generation))
            }
            _ => None,
        }
    }
}
