//! Wall-clock sources.
//!
//! The engine never reads a clock itself — every entry point takes a
//! `Timestamp` argument, and the host samples whichever clock it drives its
//! callbacks with.  `Clock` exists so host glue and tests have a common
//! shape for that sampling.

use std::time::{SystemTime, UNIX_EPOCH};

use mm_core::Timestamp;

/// A source of "now" in absolute milliseconds.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Real wall-clock time from [`SystemTime`], in milliseconds since the Unix
/// epoch.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before the epoch reads as 0 rather than failing; the
        // engine only ever uses differences between timestamps.
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Timestamp(ms)
    }
}

/// A clock advanced explicitly by the test (or by a host that replays
/// recorded time).  Deterministic: `now()` returns exactly what was set.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms }
    }

    /// Move the clock forward by `ms` and return the new instant.
    pub fn advance(&mut self, ms: u64) -> Timestamp {
        self.now_ms += ms;
        Timestamp(self.now_ms)
    }

    /// Jump the clock to an absolute instant.
    pub fn set(&mut self, now_ms: u64) -> Timestamp {
        self.now_ms = now_ms;
        Timestamp(self.now_ms)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now_ms)
    }
}
