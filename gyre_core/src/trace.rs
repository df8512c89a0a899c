// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the geometry loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! host-loop instrumentation calls around tracker operations. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! The tracker itself holds no instrumentation state; the host loop emits
//! events where it calls into the tracker. Events carry the host's
//! draw-tick counter so recorded traces order correctly without a clock.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::display::DisplayId;
use crate::geometry::{DisplayGeometry, Viewport};
use crate::rotation::Rotation;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which half of the registration bracket an event records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    /// The tracker registered with the platform service.
    Subscribe,
    /// The tracker released its registration.
    Unsubscribe,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host resumes or pauses the tracker's subscription.
#[derive(Clone, Copy, Debug)]
pub struct SubscriptionEvent {
    /// Host draw-tick counter at emission.
    pub tick: u64,
    /// Subscribe or unsubscribe.
    pub kind: SubscriptionKind,
    /// The display being (un)registered.
    pub display: DisplayId,
}

/// Emitted when the host's surface callback latches new dimensions.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceChangedEvent {
    /// Host draw-tick counter at emission.
    pub tick: u64,
    /// The latched dimensions.
    pub viewport: Viewport,
}

/// Emitted when a display-change notification reaches the tracker.
#[derive(Clone, Copy, Debug)]
pub struct DisplayChangedEvent {
    /// Host draw-tick counter at emission.
    pub tick: u64,
    /// The display the platform reported as changed.
    pub display: DisplayId,
}

/// Emitted when the tracker pushes geometry into the session.
#[derive(Clone, Copy, Debug)]
pub struct GeometryAppliedEvent {
    /// Host draw-tick counter at emission.
    pub tick: u64,
    /// Rotation that was pushed.
    pub rotation: Rotation,
    /// Viewport that was pushed.
    pub viewport: Viewport,
}

impl GeometryAppliedEvent {
    /// Creates an event from the geometry a tracker check returned.
    #[must_use]
    pub fn new(tick: u64, geometry: &DisplayGeometry) -> Self {
        Self {
            tick,
            rotation: geometry.rotation,
            viewport: geometry.viewport,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the geometry loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the tracker's subscription is acquired or released.
    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        _ = e;
    }

    /// Called when the surface callback latches new dimensions.
    fn on_surface_changed(&mut self, e: &SurfaceChangedEvent) {
        _ = e;
    }

    /// Called when a display-change notification is fed to the tracker.
    fn on_display_changed(&mut self, e: &DisplayChangedEvent) {
        _ = e;
    }

    /// Called when latched geometry is pushed into the session.
    fn on_geometry_applied(&mut self, e: &GeometryAppliedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SubscriptionEvent`].
    #[inline]
    pub fn subscription(&mut self, e: &SubscriptionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_subscription(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SurfaceChangedEvent`].
    #[inline]
    pub fn surface_changed(&mut self, e: &SurfaceChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DisplayChangedEvent`].
    #[inline]
    pub fn display_changed(&mut self, e: &DisplayChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_display_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GeometryAppliedEvent`].
    #[inline]
    pub fn geometry_applied(&mut self, e: &GeometryAppliedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry_applied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        applied: u32,
        changed: u32,
    }

    impl TraceSink for Counter {
        fn on_geometry_applied(&mut self, _e: &GeometryAppliedEvent) {
            self.applied += 1;
        }

        fn on_display_changed(&mut self, _e: &DisplayChangedEvent) {
            self.changed += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = Counter::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.display_changed(&DisplayChangedEvent {
            tick: 0,
            display: DisplayId(0),
        });
        tracer.geometry_applied(&GeometryAppliedEvent::new(
            1,
            &DisplayGeometry::new(Rotation::Deg90, Viewport::new(1, 1)),
        ));
        drop(tracer);
        assert_eq!((sink.changed, sink.applied), (1, 1));
    }

    #[test]
    fn none_tracer_discards() {
        let mut tracer = Tracer::none();
        tracer.surface_changed(&SurfaceChangedEvent {
            tick: 0,
            viewport: Viewport::new(2, 2),
        });
    }
}
