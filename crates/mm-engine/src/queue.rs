//! `WaypointQueue` — the ordered list of remaining destinations.
//!
//! Strictly FIFO: no reordering, no skipping.  A waypoint whose position
//! equals the previous one is still consumed in full — the marker animates
//! in place for that leg's duration rather than jumping ahead.  The queue
//! is populated once at construction and drained monotonically; it is never
//! refilled.

use std::collections::VecDeque;

use mm_core::Waypoint;

/// FIFO of destinations not yet travelled to.
#[derive(Debug, Default)]
pub struct WaypointQueue {
    inner: VecDeque<Waypoint>,
}

impl WaypointQueue {
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        Self {
            inner: waypoints.into(),
        }
    }

    /// Remove and return the head waypoint, or `None` when drained.
    pub fn pop(&mut self) -> Option<Waypoint> {
        self.inner.pop_front()
    }

    /// Destinations not yet consumed.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
