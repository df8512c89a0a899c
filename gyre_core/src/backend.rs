// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Gyre splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Event source** — Forwards the platform's display-manager
//!   notifications as [`DisplayEvent`] values (e.g. a `DisplayManager`
//!   listener on Android, `ScreenOrientation` `change` on the web). The
//!   delivery mechanism is backend-specific and not abstracted by a trait
//!   because setup and lifecycle differ fundamentally across platforms;
//!   backends typically queue events from the platform callback and expose
//!   a drain the host calls on its own loop.
//!
//! - **Registration** — Implements the [`DisplayService`] trait so the
//!   tracker's resume/pause bracket can subscribe and unsubscribe.
//!
//! - **Rotation query** — Implements
//!   [`DisplayHandle`](crate::display::DisplayHandle) over the platform's
//!   display object.
//!
//! The session sink is *not* a backend piece: the application owns the AR
//! session and implements
//! [`GeometrySink`](crate::session::GeometrySink) on its wrapper.
//!
//! # Crate boundaries
//!
//! `gyre_core` owns the data model, the tracker, and this contract.
//! Backend crates depend on `gyre_core` and provide platform glue.
//! Application code depends on both and wires them together in the host
//! lifecycle and draw loop:
//!
//! ```rust,ignore
//! // Resume:
//! tracker.on_resume(&mut service)?;
//!
//! // Surface callback:
//! tracker.on_surface_changed(Viewport::new(width, height));
//!
//! // Every draw tick:
//! watcher.drain(|event| tracker.on_display_event(event));
//! if let Some(geometry) = tracker.update_session_if_needed(&mut session) {
//!     tracer.geometry_applied(&GeometryAppliedEvent::new(tick, &geometry));
//! }
//!
//! // Pause:
//! tracker.on_pause(&mut service)?;
//! ```
//!
//! [`DisplayEvent`]: crate::display::DisplayEvent

use crate::display::DisplayId;

/// Registration with the platform's display-change notifications.
///
/// # Pairing
///
/// Every [`subscribe`](Self::subscribe) must be matched by exactly one
/// [`unsubscribe`](Self::unsubscribe). What happens on an unpaired call is
/// backend-defined; some platforms tolerate a double unregister, some
/// signal an error. The pairing is the caller's responsibility, not
/// something this trait papers over.
///
/// # Errors
///
/// Platform failures (service unavailable, registration rejected) surface
/// through [`Error`](Self::Error) exactly as the platform reported them.
/// Implementations do not catch, wrap, or retry.
pub trait DisplayService {
    /// The platform's native error type.
    type Error;

    /// Registers for change notifications on the given display.
    fn subscribe(&mut self, display: DisplayId) -> Result<(), Self::Error>;

    /// Releases the registration made by [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, display: DisplayId) -> Result<(), Self::Error>;
}
