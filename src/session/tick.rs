//! Periodic tick sources driving a session
//!
//! A tick source is armed at start and resume and disarmed on pause and
//! stop. Disarming drops any pending tick; nothing is queued while a source
//! is disarmed, so re-arming restarts the cadence from "now".

use crate::io::error::{Result, tick_source_error};
use std::time::{Duration, Instant};

/// Timer that delivers ticks to a session at a fixed interval
pub trait TickSource {
    /// Start delivering ticks every `interval`
    ///
    /// # Errors
    ///
    /// Returns an error if the timer cannot be created or resumed
    fn arm(&mut self, interval: Duration) -> Result<()>;

    /// Stop delivering ticks; safe to call when already disarmed
    fn disarm(&mut self);

    /// Whether ticks are currently scheduled
    fn is_armed(&self) -> bool;
}

/// Tick source whose ticks are delivered by hand
///
/// Records the armed interval so callers can check what a session asked
/// for, and can be told to refuse arming to exercise failure paths.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    interval: Option<Duration>,
    refuse: bool,
    arm_count: usize,
}

impl ManualTicks {
    /// Source that arms successfully
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose every arm attempt fails
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Make subsequent arm attempts fail or succeed
    pub const fn set_refuse(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    /// Interval of the active schedule
    pub const fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Number of successful arm calls so far
    pub const fn arm_count(&self) -> usize {
        self.arm_count
    }
}

impl TickSource for ManualTicks {
    fn arm(&mut self, interval: Duration) -> Result<()> {
        if self.refuse {
            return Err(tick_source_error("arm", &"manual tick source refused"));
        }
        self.interval = Some(interval);
        self.arm_count += 1;
        Ok(())
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

/// Deadline-based wall clock tick source for a single-threaded run loop
///
/// The loop asks how long to wait with [`IntervalTicks::time_until_due`],
/// sleeps or waits for input, then calls [`IntervalTicks::take_due`]. A late
/// loop gets one tick, not a burst of missed ones.
#[derive(Debug, Clone, Default)]
pub struct IntervalTicks {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalTicks {
    /// Disarmed source
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the next tick, zero if overdue, `None` when disarmed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }
}

impl TickSource for IntervalTicks {
    fn arm(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(tick_source_error("arm", &"interval must be non-zero"));
        }
        self.interval = interval;
        self.next_due = Instant::now().checked_add(interval);
        if self.next_due.is_none() {
            return Err(tick_source_error("arm", &"interval overflows the clock"));
        }
        Ok(())
    }

    fn disarm(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}
