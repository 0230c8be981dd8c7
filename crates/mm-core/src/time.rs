//! Wall-clock time model.
//!
//! # Design
//!
//! Time is an absolute millisecond counter, `Timestamp`.  The host reads its
//! own clock (a frame timestamp, `performance.now()`, `SystemTime`, or a
//! manual test clock) and passes the value into every engine entry point, so
//! the engine itself never blocks on or owns a clock.
//!
//! Using an integer millisecond as the canonical unit keeps all elapsed-time
//! arithmetic exact; fractional time only appears inside interpolation,
//! where the result is a coordinate rather than a schedule decision.

use std::fmt;

/// An absolute wall-clock instant in milliseconds.
///
/// Stored as `u64`: at millisecond resolution a u64 lasts ~585 million
/// years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Timestamp {
        Timestamp(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to 0 if `earlier > self` — a host handing in a timestamp
    /// older than an interval's start must not underflow elapsed time.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
