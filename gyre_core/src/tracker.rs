// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rotation tracker state machine.
//!
//! [`RotationTracker`] latches viewport and rotation changes and applies
//! them to a session lazily. It has exactly two states:
//!
//! ```text
//!   Clean ──(on_surface_changed / DisplayEvent::Changed)──► Dirty
//!   Dirty ──(update_session_if_needed)──► Clean
//! ```
//!
//! The session's consumption point is the render loop, not the platform
//! callback, so this is a polling design: the host calls
//! [`update_session_if_needed`](RotationTracker::update_session_if_needed)
//! on every draw tick and the tracker pushes at most once per latched
//! change.
//!
//! All mutation and all reads happen on the host's event-loop thread; the
//! tracker is plain data and holds no locks.

use crate::backend::DisplayService;
use crate::display::{DisplayEvent, DisplayHandle};
use crate::geometry::{DisplayGeometry, Viewport};
use crate::rotation::Rotation;
use crate::session::GeometrySink;

/// Whether a geometry change has been latched since the last apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TrackerState {
    /// Geometry already applied; the next check is a no-op.
    #[default]
    Clean,
    /// A change is latched and will be applied on the next check.
    Dirty,
}

/// Tracks display-rotation and viewport changes for one rendering surface.
///
/// Owns a [`DisplayHandle`] for the display the surface lives on. Created
/// `Clean` with a zero viewport; the host's surface callback supplies the
/// real dimensions before the first draw.
///
/// # Lifecycle
///
/// ```rust,ignore
/// // Host lifecycle:
/// tracker.on_resume(&mut service)?;    // register for display changes
/// // ... surface callback:
/// tracker.on_surface_changed(Viewport::new(width, height));
/// // ... every draw tick:
/// for event in watcher.drain() {
///     tracker.on_display_event(event);
/// }
/// tracker.update_session_if_needed(&mut session);
/// // ... host pause:
/// tracker.on_pause(&mut service)?;     // must pair with on_resume
/// ```
#[derive(Clone, Debug)]
pub struct RotationTracker<D> {
    display: D,
    state: TrackerState,
    viewport: Viewport,
}

impl<D: DisplayHandle> RotationTracker<D> {
    /// Creates a tracker for the given display, in the `Clean` state.
    #[must_use]
    pub fn new(display: D) -> Self {
        Self {
            display,
            state: TrackerState::Clean,
            viewport: Viewport::default(),
        }
    }

    /// Registers this tracker's display with the platform service.
    ///
    /// Call when the host resumes. Must be paired with exactly one
    /// [`on_pause`](Self::on_pause); see [`DisplayService`] for the pairing
    /// contract.
    ///
    /// # Errors
    ///
    /// Propagates the platform's registration error unchanged. Tracker
    /// state is untouched on failure.
    pub fn on_resume<S: DisplayService>(&mut self, service: &mut S) -> Result<(), S::Error> {
        service.subscribe(self.display.id())
    }

    /// Releases the registration made by [`on_resume`](Self::on_resume).
    ///
    /// Call when the host pauses, so no stale callbacks outlive the
    /// surface.
    ///
    /// # Errors
    ///
    /// Propagates the platform's unregistration error unchanged.
    pub fn on_pause<S: DisplayService>(&mut self, service: &mut S) -> Result<(), S::Error> {
        service.unsubscribe(self.display.id())
    }

    /// Latches new surface dimensions and marks the tracker dirty.
    ///
    /// Called from the host's surface-changed callback. Has no error
    /// conditions; a zero-sized viewport is latched as-is.
    pub fn on_surface_changed(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.state = TrackerState::Dirty;
    }

    /// Feeds a display-manager notification into the tracker.
    ///
    /// [`Changed`](DisplayEvent::Changed) marks the tracker dirty
    /// regardless of which display changed — a rotation can be routed
    /// through a different display id on some platforms, and a spurious
    /// dirty costs one geometry push. `Added` and `Removed` are no-ops.
    pub fn on_display_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Changed(_) => self.state = TrackerState::Dirty,
            DisplayEvent::Added(_) | DisplayEvent::Removed(_) => {}
        }
    }

    /// Applies latched geometry to the session if a change is pending.
    ///
    /// When dirty, reads the current rotation from the display handle,
    /// calls [`GeometrySink::set_display_geometry`] with it and the latched
    /// viewport, clears the dirty state, and returns what was pushed. When
    /// clean, returns `None` without touching the sink.
    ///
    /// Call on every draw tick.
    pub fn update_session_if_needed(
        &mut self,
        sink: &mut impl GeometrySink,
    ) -> Option<DisplayGeometry> {
        match self.state {
            TrackerState::Clean => None,
            TrackerState::Dirty => {
                let geometry = DisplayGeometry::new(self.display.rotation(), self.viewport);
                sink.set_display_geometry(
                    geometry.rotation,
                    geometry.viewport.width,
                    geometry.viewport.height,
                );
                self.state = TrackerState::Clean;
                Some(geometry)
            }
        }
    }

    /// Returns the display's current rotation.
    ///
    /// Pure read through the display handle; does not consult or modify
    /// the latched state.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.display.rotation()
    }

    /// Returns the current tracker state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Returns the most recently latched viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns a reference to the tracked display.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }
}
