//! `MovingMarker` — the waypoint-traversal state machine.
//!
//! # Control flow
//!
//! The stepper side pulls the next waypoint off the queue and builds an
//! [`Interval`]; the engine side repeatedly computes positions until the
//! interval's duration elapses, then asks for the next interval or drains.
//! Observers are notified synchronously at the transition points and answer
//! with [`Command`]s (see [`observer`][crate::observer]).
//!
//! # Concurrency model
//!
//! Single logical thread, cooperative, no blocking calls.  At most one
//! frame/timer request is outstanding at any time; a new one is armed only
//! after the previous fires or the interval transitions.  All mutation
//! happens inside the engine's entry points — hosts call `pause`, `start`,
//! `step`, the zoom notifications, or read accessors strictly between
//! ticks.

use mm_core::{LatLng, Timestamp, Waypoint};
use mm_host::{RenderTarget, ScheduleHandle, TickScheduler};

use crate::config::{PausePolicy, SchedulingStrategy, TimingFunction};
use crate::interval::Interval;
use crate::observer::{Command, MarkerObserver};
use crate::queue::WaypointQueue;
use crate::state::Phase;

/// Completion overshoot beyond which the tick is logged as a host-scheduler
/// stall (e.g. a backgrounded tab).  A frame or two of overshoot is normal.
const STALL_LOG_SLACK_MS: u64 = 1000;

/// A marker animating through a FIFO of timed waypoints.
///
/// Generic over the host's scheduling primitive `S` and the rendered marker
/// element `R`; both are owned.  Construct via
/// [`MarkerBuilder`][crate::MarkerBuilder].
pub struct MovingMarker<S: TickScheduler, R: RenderTarget> {
    /// Host scheduling primitive.  Public so hosts and tests can reach the
    /// concrete implementation they handed in.
    pub scheduler: S,

    /// The rendered marker element.
    pub render: R,

    queue: WaypointQueue,
    waypoint_count: usize,
    interval: Option<Interval>,
    phase: Phase,
    current_position: LatLng,
    current_index: usize,
    is_zooming: bool,
    pending_handle: Option<ScheduleHandle>,
    frozen_remaining_ms: Option<u64>,
    /// Set when construction found an empty queue; the drain signal is
    /// delivered on the first observer-bearing call.
    drain_pending: bool,
    drained_fired: bool,

    initial_position: LatLng,
    default_duration_ms: u64,
    strategy: SchedulingStrategy,
    pause_policy: PausePolicy,
    timing: TimingFunction,
}

impl<S: TickScheduler, R: RenderTarget> MovingMarker<S, R> {
    /// Called by the builder only; invariants (validated positions,
    /// non-zero default duration) are established there.
    pub(crate) fn new(
        scheduler: S,
        render: R,
        queue: WaypointQueue,
        initial_position: LatLng,
        default_duration_ms: u64,
        strategy: SchedulingStrategy,
        pause_policy: PausePolicy,
        timing: TimingFunction,
    ) -> Self {
        let waypoint_count = queue.len();
        let drain_pending = queue.is_empty();
        Self {
            scheduler,
            render,
            queue,
            waypoint_count,
            interval: None,
            phase: if drain_pending { Phase::Drained } else { Phase::Idle },
            current_position: initial_position,
            current_index: 0,
            is_zooming: false,
            pending_handle: None,
            frozen_remaining_ms: None,
            drain_pending,
            drained_fired: false,
            initial_position,
            default_duration_ms,
            strategy,
            pause_policy,
            timing,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// The marker's current (possibly mid-interpolation) position.
    pub fn position(&self) -> LatLng {
        self.current_position
    }

    /// Completed intervals so far.  Non-decreasing; never exceeds
    /// [`waypoint_count`][Self::waypoint_count].
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Total waypoints enqueued at construction.
    pub fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    /// Destinations not yet travelled to.
    pub fn remaining_waypoints(&self) -> usize {
        self.queue.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_zooming(&self) -> bool {
        self.is_zooming
    }

    /// The leg currently being traversed, if any.
    pub fn interval(&self) -> Option<&Interval> {
        self.interval.as_ref()
    }

    // ── Control operations ────────────────────────────────────────────────

    /// Begin traversal, or resume it after a pause.
    ///
    /// On the first call this fires the synthetic arrived-at-initial-position
    /// `destination` pseudo-event, then `start`, then steps to the first
    /// waypoint.  On a paused marker it resumes per the configured
    /// [`PausePolicy`].  Redundant calls while running are no-ops.
    pub fn start<O: MarkerObserver>(&mut self, now: Timestamp, observer: &mut O) {
        let mut commands = Vec::new();
        self.start_with(now, observer, &mut commands);
        self.drain_commands(now, observer, commands);
    }

    /// Suspend scheduling.  Idempotent: pausing an already-paused (or
    /// never-started, or drained) marker does nothing and fires nothing.
    pub fn pause<O: MarkerObserver>(&mut self, now: Timestamp, observer: &mut O) {
        let mut commands = Vec::new();
        self.pause_with(now, observer, &mut commands);
        self.drain_commands(now, observer, commands);
    }

    /// Advance to the next waypoint programmatically.
    ///
    /// The active leg is consumed from wherever the marker currently is: the
    /// next interval starts at the current position, without snapping to the
    /// abandoned leg's end.  On an idle marker this begins traversal; on an
    /// empty queue it finalizes and drains.
    pub fn step<O: MarkerObserver>(&mut self, now: Timestamp, observer: &mut O) {
        let mut commands = Vec::new();
        self.step_with(now, observer, &mut commands);
        self.drain_commands(now, observer, commands);
    }

    /// One scheduling tick.  The host calls this when the frame callback or
    /// armed timer it was asked for fires, passing its current clock value.
    pub fn on_tick<O: MarkerObserver>(&mut self, now: Timestamp, observer: &mut O) {
        // Whatever was armed has fired.
        self.pending_handle = None;

        if self.phase != Phase::Running {
            // Stale frame after a pause (frame strategy never cancels), or a
            // spurious host callback.  Ignore without re-arming.
            return;
        }
        let Some(interval) = self.interval else {
            return;
        };

        let mut commands = Vec::new();
        let elapsed = interval.elapsed_ms(now);
        if elapsed < interval.duration_ms {
            // Schedule the next tick first, then update the position.
            self.arm(now);
            if !self.is_zooming {
                let position = interval.position_at(now, self.timing);
                self.apply_position(position);
            }
        } else {
            if elapsed > interval.duration_ms + STALL_LOG_SLACK_MS {
                // Host scheduler stalled mid-leg.  Recover by snapping to the
                // end and advancing — no catch-up interpolation.
                log::debug!(
                    "tick overshot leg by {}ms (duration {}ms); snapping to end",
                    elapsed - interval.duration_ms,
                    interval.duration_ms
                );
            }
            self.complete_interval(interval, now, observer, &mut commands);
        }
        self.drain_commands(now, observer, commands);
    }

    /// The host viewport began zooming: position updates are withheld while
    /// ticks and elapsed-time tracking continue.
    pub fn zoom_started(&mut self, _now: Timestamp) {
        self.is_zooming = true;
    }

    /// The zoom finished: reconcile immediately by applying the true
    /// interpolated position for the current elapsed time (clamped to the
    /// leg's end), rather than waiting for the next natural tick.
    pub fn zoom_ended(&mut self, now: Timestamp) {
        self.is_zooming = false;
        if self.phase != Phase::Running {
            return;
        }
        let Some(interval) = self.interval else {
            return;
        };
        let position = if interval.is_complete(now) {
            interval.end
        } else {
            interval.position_at(now, self.timing)
        };
        self.apply_position(position);
    }

    // ── Internal transitions ──────────────────────────────────────────────
    //
    // The `_with` methods never dispatch commands themselves; they append to
    // the caller's buffer, and the public wrappers run `drain_commands` once
    // at the top level.  That keeps observer re-entrancy iterative instead
    // of recursive.

    fn start_with<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        if self.take_pending_drain(observer, commands) {
            return;
        }
        match self.phase {
            Phase::Idle => self.begin_traversal(now, observer, commands),
            Phase::Paused => self.resume(now),
            Phase::Running | Phase::Drained => {}
        }
    }

    fn pause_with<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        if self.take_pending_drain(observer, commands) {
            return;
        }
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::Paused;
        log::debug!("paused at {now}");

        // Timer strategy: a stale completion must never fire after a pause.
        // Frame strategy deliberately leaves the in-flight frame alone and
        // relies on `on_tick` ignoring it.
        if self.strategy == SchedulingStrategy::TimerDriven {
            if let Some(handle) = self.pending_handle.take() {
                self.scheduler.cancel(handle);
            }
        }

        if self.pause_policy == PausePolicy::RemainingDuration {
            if let Some(interval) = self.interval {
                self.frozen_remaining_ms = Some(interval.remaining_ms(now));
            }
        }
        commands.extend(observer.on_paused());
    }

    fn step_with<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        if self.take_pending_drain(observer, commands) {
            return;
        }
        match self.phase {
            Phase::Drained => {}
            Phase::Idle => self.begin_traversal(now, observer, commands),
            Phase::Running | Phase::Paused => {
                if self.interval.take().is_some() {
                    self.current_index += 1;
                }
                self.frozen_remaining_ms = None;
                // Stepping implies running; cancel whatever is armed so the
                // new leg's wakeup is the only one outstanding.
                if let Some(handle) = self.pending_handle.take() {
                    self.scheduler.cancel(handle);
                }
                self.phase = Phase::Running;
                self.advance(now, observer, commands);
            }
        }
    }

    /// First `start`: pseudo-destination at the initial position, then the
    /// `start` signal, then the first real leg.
    fn begin_traversal<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        let pseudo = Waypoint::new(self.initial_position, 0);
        commands.extend(observer.on_destination(&pseudo));
        commands.extend(observer.on_start());
        self.phase = Phase::Running;
        log::debug!(
            "traversal started at {now}: {} waypoint(s) from {}",
            self.waypoint_count,
            self.initial_position
        );
        self.advance(now, observer, commands);
    }

    fn resume(&mut self, now: Timestamp) {
        self.phase = Phase::Running;
        if self.pause_policy == PausePolicy::RemainingDuration {
            if let (Some(interval), Some(remaining)) =
                (self.interval, self.frozen_remaining_ms.take())
            {
                // Equivalent-length restart: current position to the same
                // end, over exactly the captured remainder.
                self.interval = Some(Interval {
                    start: self.current_position,
                    end: interval.end,
                    started_at: now,
                    duration_ms: remaining,
                });
            }
        }
        // Frame strategy may still have a stale frame in flight; it serves
        // as the next tick, keeping exactly one request outstanding.
        if self.pending_handle.is_none() {
            self.arm(now);
        }
    }

    /// Pull the next waypoint and begin its interval, or drain.
    fn advance<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        match self.queue.pop() {
            Some(waypoint) => {
                commands.extend(observer.on_destination(&waypoint));
                let duration_ms = waypoint.effective_duration(self.default_duration_ms);
                self.interval = Some(Interval {
                    start: self.current_position,
                    end: waypoint.position,
                    started_at: now,
                    duration_ms,
                });
                self.arm(now);
            }
            None => {
                self.interval = None;
                self.phase = Phase::Drained;
                if let Some(handle) = self.pending_handle.take() {
                    self.scheduler.cancel(handle);
                }
                if !self.drained_fired {
                    self.drained_fired = true;
                    log::debug!("destinations drained at {now}");
                    commands.extend(observer.on_drained());
                }
            }
        }
    }

    /// Snap exactly to the leg's end (eliminating interpolation drift), bump
    /// the index, and move on.
    fn complete_interval<O: MarkerObserver>(
        &mut self,
        interval: Interval,
        now: Timestamp,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) {
        self.apply_position(interval.end);
        self.current_index += 1;
        self.frozen_remaining_ms = None;
        self.advance(now, observer, commands);
    }

    /// Deliver the construction-time drain signal, once.
    fn take_pending_drain<O: MarkerObserver>(
        &mut self,
        observer: &mut O,
        commands: &mut Vec<Command>,
    ) -> bool {
        if !self.drain_pending {
            return false;
        }
        self.drain_pending = false;
        self.drained_fired = true;
        commands.extend(observer.on_drained());
        true
    }

    fn apply_position(&mut self, position: LatLng) {
        self.current_position = position;
        self.render.set_position(position);
    }

    /// Arm the next wakeup per the configured strategy.  Exactly one request
    /// may be outstanding.
    fn arm(&mut self, now: Timestamp) {
        debug_assert!(self.pending_handle.is_none(), "double-armed scheduler");
        let handle = match self.strategy {
            SchedulingStrategy::FrameDriven => self.scheduler.schedule_frame(),
            SchedulingStrategy::TimerDriven => {
                let remaining = self
                    .interval
                    .as_ref()
                    .map_or(0, |interval| interval.remaining_ms(now));
                self.scheduler.arm_timer(remaining)
            }
        };
        self.pending_handle = Some(handle);
    }

    /// Apply observer commands, including any produced while applying.
    fn drain_commands<O: MarkerObserver>(
        &mut self,
        now: Timestamp,
        observer: &mut O,
        mut commands: Vec<Command>,
    ) {
        let mut cursor = 0;
        while cursor < commands.len() {
            let command = commands[cursor];
            cursor += 1;
            match command {
                Command::Pause => self.pause_with(now, observer, &mut commands),
                Command::Start => self.start_with(now, observer, &mut commands),
                Command::Step => self.step_with(now, observer, &mut commands),
            }
        }
    }
}
