//! Render-target and viewport seams.
//!
//! The engine owns a reference to a render target rather than inheriting
//! from a marker widget class — composition over the host framework's
//! subclassing.  Two rendering styles exist:
//!
//! - **coordinate-driven**: the engine calls [`RenderTarget::set_position`]
//!   every tick and the host re-projects internally (how Leaflet-style
//!   markers work);
//! - **transform-driven**: the host wants a screen-space transform instead.
//!   [`ProjectedTarget`] adapts a [`TransformTarget`] into a `RenderTarget`
//!   by projecting through a [`Viewport`], so the engine stays oblivious.

use mm_core::{LatLng, PixelPoint};

/// The marker element the engine animates.
pub trait RenderTarget {
    /// The element's current geographic position.
    fn position(&self) -> LatLng;

    /// Move the element to `position`.
    fn set_position(&mut self, position: LatLng);
}

/// A marker element animated via a screen-space transform.
pub trait TransformTarget {
    /// The element's current screen-space offset.
    fn transform(&self) -> PixelPoint;

    /// Apply a screen-space offset (e.g. a CSS `translate3d`).
    fn set_transform(&mut self, point: PixelPoint);
}

/// Projection from geographic coordinates into the host viewport's screen
/// space.  Only transform-driven rendering uses this; coordinate-driven
/// targets project internally.
pub trait Viewport {
    fn project(&self, position: LatLng) -> PixelPoint;
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// Adapts a [`TransformTarget`] into a [`RenderTarget`] by projecting every
/// position through a [`Viewport`].
pub struct ProjectedTarget<V: Viewport, T: TransformTarget> {
    pub viewport: V,
    pub inner: T,
    position: LatLng,
}

impl<V: Viewport, T: TransformTarget> ProjectedTarget<V, T> {
    pub fn new(viewport: V, inner: T, initial: LatLng) -> Self {
        Self {
            viewport,
            inner,
            position: initial,
        }
    }
}

impl<V: Viewport, T: TransformTarget> RenderTarget for ProjectedTarget<V, T> {
    fn position(&self) -> LatLng {
        self.position
    }

    fn set_position(&mut self, position: LatLng) {
        self.position = position;
        let point = self.viewport.project(position);
        self.inner.set_transform(point);
    }
}

// ── Recording implementation ──────────────────────────────────────────────────

/// A [`RenderTarget`] that records every position it is given.
///
/// Tests assert on `history` to check what the marker visually did, tick by
/// tick.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    position: LatLng,
    /// Every position ever set, in order.
    pub history: Vec<LatLng>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently set position, if any was set at all.
    pub fn last_set(&self) -> Option<LatLng> {
        self.history.last().copied()
    }
}

impl RenderTarget for RecordingTarget {
    fn position(&self) -> LatLng {
        self.position
    }

    fn set_position(&mut self, position: LatLng) {
        self.position = position;
        self.history.push(position);
    }
}
