//! Traversal lifecycle phases.

use std::fmt;

/// Where the marker is in its lifecycle.
///
/// ```text
/// Idle ──start──▶ Running ◀──start── Paused
///                    │  ▲──pause──────┘
///                    └──queue empty──▶ Drained (terminal)
/// ```
///
/// `Drained` is terminal: the queue is never refilled, no further intervals
/// are created, and the drain signal fires exactly once.  The marker object
/// itself stays addressable and simply idles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Constructed, not yet started.
    Idle,
    /// Actively traversing an interval.
    Running,
    /// Scheduling suspended; the current interval is retained.
    Paused,
    /// All waypoints consumed.
    Drained,
}

impl Phase {
    /// `true` once no further traversal can occur.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == Phase::Drained
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Drained => "drained",
        };
        f.write_str(name)
    }
}
