//! Time source abstraction.
//!
//! # Responsibility
//! - Give services one injectable notion of "now" and "today".
//!
//! # Invariants
//! - `today()` is the calendar date of `now()` in the clock's own offset.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};
use std::sync::Mutex;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant with the offset used for local calendar dates.
    fn now(&self) -> DateTime<FixedOffset>;

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the host's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Manually driven clock for tests and deterministic demos.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward (or backward for negative durations).
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = *guard + by;
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
