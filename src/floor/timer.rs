//! Per-table occupancy timer and the clock it reads from

use crate::utils::{current_timestamp, minutes_between};
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of the current time
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        current_timestamp()
    }
}

/// Clock that only moves when told to (for demos and tests)
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(current_timestamp())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
            .lock()
            .map(|now| *now)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

/// Elapsed-occupancy clock owned by a single table
///
/// A timer starts unset and is armed when its table is seated. Arming again
/// restarts it; there is no explicit stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    started_at: Option<DateTime<Utc>>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current time as the start instant
    pub fn arm(&mut self, clock: &dyn Clock) {
        self.started_at = Some(clock.now());
    }

    /// Minutes since the timer was armed, or 0 if it never was
    pub fn elapsed_minutes(&self, clock: &dyn Clock) -> f64 {
        match self.started_at {
            Some(start) => minutes_between(start, clock.now()),
            None => 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
