//! `mm-host` — trait seams for everything the host environment provides.
//!
//! The engine animates a marker but owns none of the machinery around it:
//! the clock, the frame/timer scheduling primitive, the map viewport's
//! projection, and the rendered marker element all belong to the host.  This
//! crate defines those seams as traits, plus deterministic implementations
//! used by engine tests and by hosts that drive time manually.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`clock`]    | `Clock` trait, `SystemClock`, `ManualClock`                   |
//! | [`schedule`] | `TickScheduler` trait, `ScheduleHandle`, `ManualScheduler`    |
//! | [`render`]   | `RenderTarget`, `TransformTarget`, `Viewport`, adapters       |
//!
//! # Dependency direction
//!
//! `mm-host` depends only on `mm-core`.  The engine takes these traits as
//! generic parameters; swap in a real browser/GUI binding or the manual test
//! doubles with no engine changes.

pub mod clock;
pub mod render;
pub mod schedule;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, ManualClock, SystemClock};
pub use render::{ProjectedTarget, RecordingTarget, RenderTarget, TransformTarget, Viewport};
pub use schedule::{Armed, ArmedKind, ManualScheduler, ScheduleHandle, TickScheduler};
