//! Fluent builder for constructing a [`MovingMarker`].

use mm_core::{LatLng, Waypoint};
use mm_host::{RenderTarget, TickScheduler};

use crate::config::{linear, PausePolicy, SchedulingStrategy, TimingFunction, DEFAULT_DURATION_MS};
use crate::error::{EngineError, EngineResult};
use crate::marker::MovingMarker;
use crate::queue::WaypointQueue;

/// Fluent builder for [`MovingMarker<S, R>`].
///
/// # Required inputs
///
/// - the marker's initial position, and
/// - (at `build`) the host scheduler and render target.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                         |
/// |-------------------------|---------------------------------|
/// | `.waypoints(v)`         | empty (drains immediately)      |
/// | `.default_duration(ms)` | 1000                            |
/// | `.strategy(s)`          | `SchedulingStrategy::FrameDriven` |
/// | `.pause_policy(p)`      | `PausePolicy::TimePreserving`   |
/// | `.timing(f)`            | [`linear`]                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut marker = MarkerBuilder::new(LatLng::new(37.774763, -122.392041))
///     .waypoints(route)
///     .pause_policy(PausePolicy::RemainingDuration)
///     .build(scheduler, target)?;
/// marker.start(clock.now(), &mut observer);
/// ```
pub struct MarkerBuilder {
    initial_position: LatLng,
    waypoints: Vec<Waypoint>,
    default_duration_ms: u64,
    strategy: SchedulingStrategy,
    pause_policy: PausePolicy,
    timing: TimingFunction,
}

impl MarkerBuilder {
    pub fn new(initial_position: LatLng) -> Self {
        Self {
            initial_position,
            waypoints: Vec::new(),
            default_duration_ms: DEFAULT_DURATION_MS,
            strategy: SchedulingStrategy::default(),
            pause_policy: PausePolicy::default(),
            timing: linear,
        }
    }

    /// Supply the ordered destination sequence.  May be empty, in which case
    /// the marker is terminal from construction and signals the drain on the
    /// first observer-bearing call.
    pub fn waypoints(mut self, waypoints: Vec<Waypoint>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Duration substituted for waypoints that leave theirs unspecified.
    /// Must be non-zero.
    pub fn default_duration(mut self, ms: u64) -> Self {
        self.default_duration_ms = ms;
        self
    }

    pub fn strategy(mut self, strategy: SchedulingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn pause_policy(mut self, policy: PausePolicy) -> Self {
        self.pause_policy = policy;
        self
    }

    /// Custom timing function mapping elapsed ms to effective ms.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Validate the configuration and construct the marker, placing the
    /// render target at the initial position.
    pub fn build<S: TickScheduler, R: RenderTarget>(
        self,
        scheduler: S,
        mut render: R,
    ) -> EngineResult<MovingMarker<S, R>> {
        if self.default_duration_ms == 0 {
            return Err(EngineError::ZeroDefaultDuration);
        }
        self.initial_position.validate()?;
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            waypoint
                .validate()
                .map_err(|source| EngineError::WaypointPosition { index, source })?;
        }

        render.set_position(self.initial_position);
        Ok(MovingMarker::new(
            scheduler,
            render,
            WaypointQueue::from_waypoints(self.waypoints),
            self.initial_position,
            self.default_duration_ms,
            self.strategy,
            self.pause_policy,
            self.timing,
        ))
    }
}
