// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport dimensions and the geometry pushed to a session.
//!
//! [`Viewport`] is the pixel size of the rendering surface.
//! [`DisplayGeometry`] pairs it with the current [`Rotation`] — the exact
//! triple a session's `set_display_geometry` call consumes, carried as one
//! value so trace sinks and tests can treat a push atomically.

use core::fmt;

use kurbo::{Affine, Point};

use crate::rotation::Rotation;

/// Pixel dimensions of the rendering surface.
///
/// Dimensions are unsigned; a surface cannot have negative extent. A
/// zero-sized viewport is representable because surface callbacks can
/// report one mid-teardown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport from pixel dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the viewport with width and height swapped.
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Viewport({}x{})", self.width, self.height)
    }
}

/// The rotation/viewport pair applied to a session.
///
/// Produced by
/// [`RotationTracker::update_session_if_needed`](crate::tracker::RotationTracker::update_session_if_needed)
/// to report what was pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DisplayGeometry {
    /// Screen rotation at the time of the push.
    pub rotation: Rotation,
    /// Latched surface dimensions.
    pub viewport: Viewport,
}

impl DisplayGeometry {
    /// Creates a geometry value from its parts.
    #[inline]
    #[must_use]
    pub const fn new(rotation: Rotation, viewport: Viewport) -> Self {
        Self {
            rotation,
            viewport,
        }
    }

    /// Returns the transform mapping normalized surface coordinates from the
    /// natural orientation into this geometry's rotation.
    ///
    /// Rotates about the center of the unit square, so the result stays in
    /// `[0, 1] × [0, 1]` for right-angle rotations. Consumers use this to
    /// remap camera texture coordinates onto the rotated viewport.
    #[inline]
    #[must_use]
    pub fn uv_transform(&self) -> Affine {
        Affine::rotate_about(self.rotation.radians(), Point::new(0.5, 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport() {
        assert!(Viewport::new(0, 1920).is_empty());
        assert!(Viewport::new(1080, 0).is_empty());
        assert!(!Viewport::new(1080, 1920).is_empty());
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let vp = Viewport::new(1080, 1920);
        assert_eq!(vp.transposed(), Viewport::new(1920, 1080));
        assert_eq!(vp.transposed().transposed(), vp);
    }

    #[test]
    fn uv_transform_identity_at_natural_orientation() {
        let geometry = DisplayGeometry::new(Rotation::Deg0, Viewport::new(1080, 1920));
        let p = geometry.uv_transform() * Point::new(0.25, 0.75);
        assert!((p.x - 0.25).abs() < 1e-9);
        assert!((p.y - 0.75).abs() < 1e-9);
    }

    #[test]
    fn uv_transform_quarter_turn_moves_origin_corner() {
        let geometry = DisplayGeometry::new(Rotation::Deg90, Viewport::new(1080, 1920));
        let p = geometry.uv_transform() * Point::new(0.0, 0.0);
        // Rotating the unit square a quarter turn about its center carries
        // (0,0) to (1,0).
        assert!((p.x - 1.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn uv_transform_half_turn_maps_corner_to_opposite() {
        let geometry = DisplayGeometry::new(Rotation::Deg180, Viewport::new(1080, 1920));
        let p = geometry.uv_transform() * Point::new(0.0, 0.0);
        assert!((p.x - 1.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uv_transform_stays_in_unit_square() {
        for rotation in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            let geometry = DisplayGeometry::new(rotation, Viewport::new(100, 100));
            for corner in [
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
            ] {
                let p = geometry.uv_transform() * corner;
                assert!(
                    (-1e-9..=1.0 + 1e-9).contains(&p.x) && (-1e-9..=1.0 + 1e-9).contains(&p.y),
                    "corner left the unit square under {rotation:?}"
                );
            }
        }
    }
}
