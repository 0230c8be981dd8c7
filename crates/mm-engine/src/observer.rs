//! Lifecycle signals and the `MarkerObserver` trait.
//!
//! # Re-entrancy model
//!
//! Signals fire synchronously from inside engine entry points, while the
//! marker's own state is mid-transition.  Letting a listener call straight
//! back into the marker would require it to hold a second mutable borrow.
//! Instead, each hook *returns* [`Command`]s; the marker applies them after
//! the dispatch that produced them completes.  A listener that wants to
//! pause the moment a particular destination is announced returns
//! `vec![Command::Pause]` and the pause lands at a safe point, in order,
//! with no state corruption possible.

use mm_core::Waypoint;

/// A control request returned by an observer hook, applied by the marker
/// once the current dispatch finishes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Suspend scheduling (same as calling `pause`).
    Pause,
    /// Begin or resume traversal (same as calling `start`).
    Start,
    /// Advance to the next waypoint programmatically (same as `step`).
    Step,
}

/// Callbacks invoked by the marker at its lifecycle transition points.
///
/// All methods default to no-ops returning no commands, so implementors
/// only override what they care about.  Order of first possible occurrence:
/// `on_destination` (the synthetic arrived-at-initial-position pseudo-event),
/// `on_start`, `on_destination` per leg, `on_paused` per pause, and finally
/// `on_drained` exactly once.
///
/// # Example — icon rotation
///
/// ```rust,ignore
/// struct RotateIcon<'a> { icon: &'a mut Icon }
///
/// impl MarkerObserver for RotateIcon<'_> {
///     fn on_destination(&mut self, waypoint: &Waypoint) -> Vec<Command> {
///         if let Some(bearing) = waypoint.bearing {
///             self.icon.rotate(bearing);
///         }
///         vec![]
///     }
/// }
/// ```
pub trait MarkerObserver {
    /// A new destination is about to be travelled to.  Fires once per
    /// interval, before interpolation of that leg begins; the waypoint
    /// carries its position, duration, and optional bearing.
    fn on_destination(&mut self, _waypoint: &Waypoint) -> Vec<Command> {
        vec![]
    }

    /// Traversal began.  Fires once, after the initial-position
    /// pseudo-destination.
    fn on_start(&mut self) -> Vec<Command> {
        vec![]
    }

    /// The marker was paused.  Fires once per effective transition into the
    /// paused phase — redundant `pause` calls are silent.
    fn on_paused(&mut self) -> Vec<Command> {
        vec![]
    }

    /// Every enqueued waypoint has been consumed.  Fires exactly once and
    /// always last.
    fn on_drained(&mut self) -> Vec<Command> {
        vec![]
    }
}

/// A [`MarkerObserver`] that ignores every signal.  Use when an entry point
/// demands an observer but no listener exists.
pub struct NoopObserver;

impl MarkerObserver for NoopObserver {}
