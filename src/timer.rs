//! Repeating interval timer polled from the event loop.

use std::time::{Duration, Instant};

/// A single-threaded repeating timer.
///
/// The timer does not own a thread. The event loop polls it with the current
/// time and runs the callback itself whenever [`IntervalTimer::poll`] reports
/// a firing. Firings that fall behind are coalesced into one.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    running: bool,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arms the timer, dropping any schedule already in progress.
    ///
    /// The first firing comes one period after the next poll.
    pub fn start(&mut self) {
        self.stop();
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    /// Returns `true` when a firing is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let Some(due) = self.next_due else {
            self.next_due = Some(now + self.period);
            return false;
        };

        if now < due {
            return false;
        }

        let next = due + self.period;
        self.next_due = Some(if next > now { next } else { now + self.period });
        true
    }
}
