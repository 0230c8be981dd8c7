//! `mm-core` — foundational types for the marker-motion animation framework.
//!
//! This crate is a dependency of every other `mm-*` crate.  It intentionally
//! has no `mm-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`geo`]      | `LatLng`, `PixelPoint`, coordinate validation   |
//! | [`time`]     | `Timestamp` (wall-clock milliseconds)           |
//! | [`waypoint`] | `Waypoint` — target position + travel duration  |
//! | [`error`]    | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod time;
pub mod waypoint;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{LatLng, PixelPoint};
pub use time::Timestamp;
pub use waypoint::Waypoint;
