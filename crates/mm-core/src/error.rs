//! Foundational error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, keeping error sites clean.

use thiserror::Error;

/// Errors producible by the core primitives.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error(
        "invalid position ({lat}, {lng}): coordinates must be finite with \
         lat in [-90, 90] and lng in [-180, 180]"
    )]
    InvalidPosition { lat: f64, lng: f64 },
}

/// Shorthand result type for all `mm-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
