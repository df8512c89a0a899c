// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display identification and the platform seams backends implement.
//!
//! [`DisplayId`] is a lightweight handle identifying a specific display.
//! Backends assign these; core treats them as opaque.
//!
//! [`DisplayEvent`] is the single callback type the platform's
//! display-manager notifications are funneled through. Platforms deliver
//! added/removed/changed as one polymorphic listener; gyre models that as a
//! tagged enum with explicit variants so backends forward every
//! notification and consumers decide which ones matter (the tracker reacts
//! only to [`Changed`](DisplayEvent::Changed)).
//!
//! [`DisplayHandle`] is the side-effect-free rotation query. The
//! registration half of the platform seam lives in
//! [`backend`](crate::backend) with the rest of the backend contract.

use core::fmt;

use crate::rotation::Rotation;

/// Identifies a specific display.
///
/// Backends assign display IDs to distinguish multiple displays. Core code
/// passes them through without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DisplayId(pub u32);

impl fmt::Debug for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayId({})", self.0)
    }
}

/// A display-manager notification forwarded by a backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayEvent {
    /// A display was connected. The tracker ignores this.
    Added(DisplayId),
    /// A display was disconnected. The tracker ignores this.
    Removed(DisplayId),
    /// A display's rotation or metrics changed.
    Changed(DisplayId),
}

impl DisplayEvent {
    /// Returns the display this event refers to.
    #[inline]
    #[must_use]
    pub const fn display(self) -> DisplayId {
        match self {
            Self::Added(id) | Self::Removed(id) | Self::Changed(id) => id,
        }
    }
}

/// Read access to a platform display's current rotation.
///
/// Implementations wrap whatever the platform hands out (a cached
/// `ScreenOrientation` object, a display token resolved at query time) and
/// must be side-effect free: calling [`rotation`](Self::rotation) any
/// number of times observes but never changes platform state.
pub trait DisplayHandle {
    /// Returns this display's identifier.
    fn id(&self) -> DisplayId;

    /// Returns the display's current rotation.
    fn rotation(&self) -> Rotation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_exposes_its_display() {
        let id = DisplayId(3);
        assert_eq!(DisplayEvent::Added(id).display(), id);
        assert_eq!(DisplayEvent::Removed(id).display(), id);
        assert_eq!(DisplayEvent::Changed(id).display(), id);
    }
}
