// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to the external AR session.
//!
//! The session object (owned by the AR SDK, not by gyre) needs the current
//! display geometry to map camera and tracking coordinates to screen
//! space. [`GeometrySink`] is the one call gyre makes into it.

use crate::rotation::Rotation;

/// Receives display geometry updates.
///
/// Real implementations wrap an AR session's `set_display_geometry`
/// operation; tests use recording doubles. The tracker guarantees at most
/// one call per latched change, so implementations need no deduplication of
/// their own.
pub trait GeometrySink {
    /// Applies the given rotation and viewport dimensions to the session.
    fn set_display_geometry(&mut self, rotation: Rotation, width: u32, height: u32);
}

impl<T: GeometrySink + ?Sized> GeometrySink for &mut T {
    #[inline]
    fn set_display_geometry(&mut self, rotation: Rotation, width: u32, height: u32) {
        (**self).set_display_geometry(rotation, width, height);
    }
}
