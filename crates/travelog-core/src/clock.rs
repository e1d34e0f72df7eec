//! Time source for entry ids.

use std::cell::Cell;

use chrono::Utc;

use crate::error::{JournalError, Result};
use crate::storage::{Entry, EntryId};

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that returns a fixed instant until moved.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, delta: i64) {
        self.millis.set(self.millis.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Pick the id for a new entry.
///
/// Uses the current time unless that would collide with or sort before an
/// existing id, in which case it steps one past the largest id.
///
/// # Errors
///
/// Returns `JournalError::IdOverflow` when the largest id is `i64::MAX`.
pub fn allocate_id(now_millis: i64, existing: &[Entry]) -> Result<EntryId> {
    match existing.iter().map(|e| e.id).max() {
        Some(max) if max >= now_millis => max.checked_add(1).ok_or(JournalError::IdOverflow(max)),
        _ => Ok(now_millis),
    }
}
