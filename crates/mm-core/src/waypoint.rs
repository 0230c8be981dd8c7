//! The `Waypoint` type — one enqueued destination.

use crate::error::CoreResult;
use crate::geo::LatLng;

/// A target position plus the time to travel *into* it from the previous
/// position (or from the marker's initial position for the first waypoint).
///
/// Waypoints are immutable once enqueued and are consumed in strict FIFO
/// order.  A `duration_ms` of 0 stands for "unspecified" and is replaced by
/// the engine's configured default when the travel interval is created, so a
/// zero duration never reaches the interpolation divide.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Where this leg ends.
    pub position: LatLng,

    /// Travel time into `position`, in milliseconds.  0 = use the default.
    pub duration_ms: u64,

    /// Optional heading in degrees, carried through the `destination` event
    /// untouched.  Hosts use it for icon rotation; the engine ignores it.
    pub bearing: Option<f64>,
}

impl Waypoint {
    pub fn new(position: LatLng, duration_ms: u64) -> Self {
        Self {
            position,
            duration_ms,
            bearing: None,
        }
    }

    /// Attach a heading in degrees.
    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// The duration this waypoint's leg actually runs for: `duration_ms`,
    /// or `default_ms` when the waypoint left it unspecified (0).
    #[inline]
    pub fn effective_duration(&self, default_ms: u64) -> u64 {
        if self.duration_ms == 0 {
            default_ms
        } else {
            self.duration_ms
        }
    }

    /// Validate the waypoint's position coordinates.
    pub fn validate(&self) -> CoreResult<()> {
        self.position.validate()
    }
}
