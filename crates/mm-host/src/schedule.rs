//! The tick-scheduling seam.
//!
//! # Model
//!
//! The engine is cooperative and single-threaded: it never blocks, and it
//! only runs when the host invokes a callback it asked for.  Two primitives
//! cover the environments we care about:
//!
//! - **frame**: "call me on the next animation frame" (repeating poll), and
//! - **timer**: "call me once after `delay_ms`" (armed for a leg's
//!   remaining duration).
//!
//! Both return an opaque [`ScheduleHandle`] so an outstanding request can be
//! cancelled.  The engine maintains at most one outstanding handle at a
//! time; when the host fires the wakeup it calls `MovingMarker::on_tick`
//! with the current timestamp.

/// Opaque identifier for one outstanding frame or timer request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ScheduleHandle(pub u64);

/// Host-provided scheduling primitive.
///
/// Implementations wrap whatever the target environment offers —
/// `requestAnimationFrame`/`setTimeout` in a browser, a GUI event loop's
/// timer, or [`ManualScheduler`] in tests.
pub trait TickScheduler {
    /// Request a callback on the next frame.
    fn schedule_frame(&mut self) -> ScheduleHandle;

    /// Request a single callback after `delay_ms`.
    fn arm_timer(&mut self, delay_ms: u64) -> ScheduleHandle;

    /// Cancel an outstanding request.  Cancelling a handle that already
    /// fired (or was already cancelled) must be a no-op.
    fn cancel(&mut self, handle: ScheduleHandle);
}

// ── Manual implementation ─────────────────────────────────────────────────────

/// What kind of wakeup a [`ManualScheduler`] entry represents.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArmedKind {
    Frame,
    Timer { delay_ms: u64 },
}

/// One outstanding request recorded by [`ManualScheduler`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Armed {
    pub handle: ScheduleHandle,
    pub kind: ArmedKind,
}

/// A [`TickScheduler`] that records requests instead of arming anything.
///
/// The test (or replay host) inspects and pops entries, then invokes the
/// engine's tick entry point itself with a timestamp of its choosing —
/// fully deterministic, no real time involved.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: u64,
    /// Outstanding requests, oldest first.
    pub armed: Vec<Armed>,
    /// Every handle ever passed to [`TickScheduler::cancel`].
    pub cancelled: Vec<ScheduleHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest outstanding request, simulating the host firing it.
    pub fn fire_next(&mut self) -> Option<Armed> {
        if self.armed.is_empty() {
            None
        } else {
            Some(self.armed.remove(0))
        }
    }

    /// Number of requests currently outstanding.
    pub fn outstanding(&self) -> usize {
        self.armed.len()
    }

    /// `true` if `handle` was cancelled at some point.
    pub fn was_cancelled(&self, handle: ScheduleHandle) -> bool {
        self.cancelled.contains(&handle)
    }

    fn push(&mut self, kind: ArmedKind) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_handle);
        self.next_handle += 1;
        self.armed.push(Armed { handle, kind });
        handle
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule_frame(&mut self) -> ScheduleHandle {
        self.push(ArmedKind::Frame)
    }

    fn arm_timer(&mut self, delay_ms: u64) -> ScheduleHandle {
        self.push(ArmedKind::Timer { delay_ms })
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        self.armed.retain(|a| a.handle != handle);
        self.cancelled.push(handle);
    }
}
