//! Construction-time configuration: scheduling strategy, pause policy, and
//! the timing function.

/// Duration used for a waypoint whose own duration is unspecified (0).
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Which host primitive drives the engine's ticks.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulingStrategy {
    /// Re-arm a frame callback after every mid-leg tick (cooperative
    /// polling).  Pausing does not cancel an in-flight frame; the engine
    /// simply stops re-arming, and a stale frame firing while paused is
    /// ignored.
    #[default]
    FrameDriven,

    /// Arm a one-shot timer for the leg's remaining duration.  Pausing
    /// cancels the outstanding timer so a stale completion can never fire.
    /// A timer that fires early mid-leg re-arms for the new remaining time.
    TimerDriven,
}

/// What pausing does to elapsed-time accounting.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PausePolicy {
    /// The interval's start timestamp is left untouched: wall-clock time
    /// keeps accruing against it while paused, so a long pause can consume
    /// the whole leg and the marker snaps to the leg's end on resume.
    #[default]
    TimePreserving,

    /// Pausing captures the leg's remaining duration; resuming restarts an
    /// equivalent-length interval from the marker's current position over
    /// exactly that remainder.  Visually, no travel time is lost.
    RemainingDuration,
}

/// Maps raw elapsed milliseconds to effective elapsed milliseconds before
/// interpolation.  The identity function gives constant speed; hosts supply
/// their own curve for easing.
pub type TimingFunction = fn(f64) -> f64;

/// The default, constant-speed timing function.
pub fn linear(t: f64) -> f64 {
    t
}
