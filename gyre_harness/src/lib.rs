// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic display and session doubles for tests and demos.
//!
//! Real backends talk to a display manager and an AR runtime; neither is
//! available in tests or headless demos. This crate provides scriptable
//! stand-ins for all three seams:
//!
//! - [`ScriptedDisplay`] — a [`DisplayHandle`] whose rotation the script
//!   sets between draw ticks.
//! - [`RecordingSession`] — a [`GeometrySink`] that records every push in
//!   order.
//! - [`CountingService`] — a [`DisplayService`] that counts the
//!   subscribe/unsubscribe bracket and can fail on demand.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use gyre_core::backend::DisplayService;
use gyre_core::display::{DisplayHandle, DisplayId};
use gyre_core::geometry::{DisplayGeometry, Viewport};
use gyre_core::rotation::Rotation;
use gyre_core::session::GeometrySink;

/// A display whose rotation is set by the test script.
///
/// Cloning shares the underlying rotation cell, so a test can keep one
/// clone to steer while the tracker owns another:
///
/// ```rust,ignore
/// let display = ScriptedDisplay::new(DisplayId(0));
/// let mut tracker = RotationTracker::new(display.clone());
/// display.set_rotation(Rotation::Deg90);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDisplay {
    id: DisplayId,
    rotation: Rc<Cell<Rotation>>,
}

impl ScriptedDisplay {
    /// Creates a display at the natural orientation.
    #[must_use]
    pub fn new(id: DisplayId) -> Self {
        Self {
            id,
            rotation: Rc::new(Cell::new(Rotation::Deg0)),
        }
    }

    /// Sets the rotation all clones observe.
    pub fn set_rotation(&self, rotation: Rotation) {
        self.rotation.set(rotation);
    }
}

impl DisplayHandle for ScriptedDisplay {
    fn id(&self) -> DisplayId {
        self.id
    }

    fn rotation(&self) -> Rotation {
        self.rotation.get()
    }
}

/// A session double that records every geometry push in order.
#[derive(Debug, Default)]
pub struct RecordingSession {
    pushes: Vec<DisplayGeometry>,
}

impl RecordingSession {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded pushes, oldest first.
    #[must_use]
    pub fn pushes(&self) -> &[DisplayGeometry] {
        &self.pushes
    }

    /// Returns how many pushes were recorded.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.pushes.len()
    }
}

impl GeometrySink for RecordingSession {
    fn set_display_geometry(&mut self, rotation: Rotation, width: u32, height: u32) {
        self.pushes.push(DisplayGeometry::new(
            rotation,
            Viewport::new(width, height),
        ));
    }
}

/// The error a [`CountingService`] produces when told to fail.
///
/// Stands in for a platform's "display service unavailable" condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceUnavailable;

impl fmt::Display for ServiceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("display service unavailable")
    }
}

impl core::error::Error for ServiceUnavailable {}

/// A display service that counts its registration bracket.
///
/// `fail_next` makes the next call return [`ServiceUnavailable`] without
/// counting it, for error-propagation tests.
#[derive(Debug, Default)]
pub struct CountingService {
    subscribes: u32,
    unsubscribes: u32,
    fail_next: bool,
}

impl CountingService {
    /// Creates a service with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next subscribe or unsubscribe fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Returns how many subscribes succeeded.
    #[must_use]
    pub fn subscribes(&self) -> u32 {
        self.subscribes
    }

    /// Returns how many unsubscribes succeeded.
    #[must_use]
    pub fn unsubscribes(&self) -> u32 {
        self.unsubscribes
    }

    /// Returns `true` if every subscribe has a matching unsubscribe.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.subscribes == self.unsubscribes
    }

    fn check_failure(&mut self) -> Result<(), ServiceUnavailable> {
        if self.fail_next {
            self.fail_next = false;
            Err(ServiceUnavailable)
        } else {
            Ok(())
        }
    }
}

impl DisplayService for CountingService {
    type Error = ServiceUnavailable;

    fn subscribe(&mut self, _display: DisplayId) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.subscribes += 1;
        Ok(())
    }

    fn unsubscribe(&mut self, _display: DisplayId) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.unsubscribes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_display_shares_rotation_across_clones() {
        let display = ScriptedDisplay::new(DisplayId(2));
        let clone = display.clone();
        display.set_rotation(Rotation::Deg270);
        assert_eq!(clone.rotation(), Rotation::Deg270);
        assert_eq!(clone.id(), DisplayId(2));
    }

    #[test]
    fn recording_session_keeps_order() {
        let mut session = RecordingSession::new();
        session.set_display_geometry(Rotation::Deg0, 1, 2);
        session.set_display_geometry(Rotation::Deg90, 3, 4);
        assert_eq!(session.push_count(), 2);
        assert_eq!(
            session.pushes()[1],
            DisplayGeometry::new(Rotation::Deg90, Viewport::new(3, 4))
        );
    }

    #[test]
    fn counting_service_fails_once_then_recovers() {
        let mut service = CountingService::new();
        service.fail_next();
        assert_eq!(service.subscribe(DisplayId(0)), Err(ServiceUnavailable));
        assert_eq!(service.subscribe(DisplayId(0)), Ok(()));
        assert_eq!(service.subscribes(), 1, "failed call must not count");
    }
}
