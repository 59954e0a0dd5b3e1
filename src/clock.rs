//! Time sources for stamping ledger entries.

use chrono::{Local, NaiveDateTime};

/// Local wall time at which a transaction was recorded.
pub type Timestamp = NaiveDateTime;

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
