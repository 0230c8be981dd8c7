//! Geographic coordinate and screen point types.
//!
//! `LatLng` uses `f64` (double-precision) latitude/longitude.  The engine's
//! contract is exact endpoint equality after a completed leg (position is
//! snapped to the leg's end point), so coordinates keep whatever precision
//! the host map hands in.

use crate::error::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a coordinate, rejecting non-finite or out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> CoreResult<Self> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// `Ok(())` if both coordinates are finite and within WGS-84 bounds.
    pub fn validate(&self) -> CoreResult<()> {
        let in_range = self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng);
        if in_range {
            Ok(())
        } else {
            Err(CoreError::InvalidPosition {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// A point in the host viewport's screen space, in CSS pixels.
///
/// Produced by viewport projection and consumed by transform-based render
/// targets; the engine core never inspects one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
