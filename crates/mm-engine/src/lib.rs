//! `mm-engine` — the waypoint-traversal state machine and interpolation
//! engine behind a smoothly moving map marker.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`queue`]    | `WaypointQueue` — FIFO of remaining destinations               |
//! | [`interval`] | `Interval` — one leg of travel + the interpolation formula     |
//! | [`state`]    | `Phase` — Idle / Running / Paused / Drained                    |
//! | [`observer`] | `MarkerObserver`, `Command` — lifecycle signals                |
//! | [`config`]   | `SchedulingStrategy`, `PausePolicy`, timing functions          |
//! | [`marker`]   | `MovingMarker<S, R>` — the traversal state machine             |
//! | [`builder`]  | `MarkerBuilder` — validated construction                       |
//! | [`error`]    | `EngineError`, `EngineResult`                                  |
//!
//! # Traversal model
//!
//! A marker holds an ordered FIFO of [`Waypoint`][mm_core::Waypoint]s.  Each
//! leg of travel is an [`Interval`]: start position, end position, the
//! timestamp traversal of the leg began, and a duration.  On every host
//! tick the engine computes elapsed time against the interval's start:
//!
//! - mid-leg, it re-arms the next wakeup and (unless a zoom is in progress)
//!   interpolates each coordinate linearly;
//! - at or past the leg's duration, it snaps exactly to the end position —
//!   killing accumulated floating-point drift — and either begins the next
//!   leg immediately or drains.
//!
//! The host side is abstract: scheduling goes through
//! [`TickScheduler`][mm_host::TickScheduler] (frame-driven or timer-driven,
//! selected at construction), rendering through
//! [`RenderTarget`][mm_host::RenderTarget], and lifecycle signals through
//! [`MarkerObserver`].  Observers respond with [`Command`]s rather than
//! calling back into the marker, so pausing from inside a `destination`
//! listener is safe by construction.
//!
//! # Example
//!
//! ```rust,ignore
//! let marker = MarkerBuilder::new(LatLng::new(0.0, 0.0))
//!     .waypoints(vec![
//!         Waypoint::new(LatLng::new(1.0, 1.0), 500),
//!         Waypoint::new(LatLng::new(2.0, 2.0), 300),
//!     ])
//!     .strategy(SchedulingStrategy::FrameDriven)
//!     .build(scheduler, target)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod interval;
pub mod marker;
pub mod observer;
pub mod queue;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::MarkerBuilder;
pub use config::{linear, PausePolicy, SchedulingStrategy, TimingFunction, DEFAULT_DURATION_MS};
pub use error::{EngineError, EngineResult};
pub use interval::Interval;
pub use marker::MovingMarker;
pub use observer::{Command, MarkerObserver, NoopObserver};
pub use queue::WaypointQueue;
pub use state::Phase;
