//! `Interval` — one leg of travel between two consecutive positions.

use mm_core::{LatLng, Timestamp};

use crate::config::TimingFunction;

/// One leg: start point, end point, the instant traversal began, and how
/// long the leg runs.
///
/// Created fresh each time the marker advances to the next waypoint;
/// `started_at` is captured exactly once, at that moment — never when the
/// waypoint was enqueued.  `duration_ms` is defaulted before construction,
/// so a zero value can only arise from a remaining-duration resume landing
/// exactly on a completion boundary; in that case the next tick completes
/// the leg without ever reaching the interpolation divide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub start: LatLng,
    pub end: LatLng,
    pub started_at: Timestamp,
    pub duration_ms: u64,
}

impl Interval {
    /// Milliseconds elapsed since the leg began (saturating at 0).
    #[inline]
    pub fn elapsed_ms(&self, now: Timestamp) -> u64 {
        now.since(self.started_at)
    }

    /// `true` once the leg's full duration has elapsed.
    #[inline]
    pub fn is_complete(&self, now: Timestamp) -> bool {
        self.elapsed_ms(now) >= self.duration_ms
    }

    /// Milliseconds of travel left, saturating at 0.
    #[inline]
    pub fn remaining_ms(&self, now: Timestamp) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now))
    }

    /// Interpolated position at `now`.
    ///
    /// Plain linear interpolation in coordinate space, per coordinate:
    ///
    /// ```text
    /// value = start + (end - start) / duration * t
    /// ```
    ///
    /// where `t = timing(elapsed)`.  Deliberately not great-circle — the
    /// legs a marker animates over are short enough that coordinate-space
    /// lerp is indistinguishable on screen.  Callers must not invoke this
    /// once the leg is complete; completion snaps to `end` instead, which
    /// is what guarantees drift-free endpoints.
    pub fn position_at(&self, now: Timestamp, timing: TimingFunction) -> LatLng {
        let t = timing(self.elapsed_ms(now) as f64);
        let duration = self.duration_ms as f64;
        LatLng::new(
            self.start.lat + (self.end.lat - self.start.lat) / duration * t,
            self.start.lng + (self.end.lng - self.start.lng) / duration * t,
        )
    }
}
