// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! Events are ordered by the host's draw-tick counter, which the lines
//! show verbatim.

use std::io::Write;

use gyre_core::trace::{
    DisplayChangedEvent, GeometryAppliedEvent, SubscriptionEvent, SubscriptionKind,
    SurfaceChangedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn subscription_name(kind: SubscriptionKind) -> &'static str {
    match kind {
        SubscriptionKind::Subscribe => "subscribe",
        SubscriptionKind::Unsubscribe => "unsubscribe",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        let _ = writeln!(
            self.writer,
            "[{}] tick={} display={}",
            subscription_name(e.kind),
            e.tick,
            e.display.0,
        );
    }

    fn on_surface_changed(&mut self, e: &SurfaceChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[surface] tick={} viewport={}x{}",
            e.tick, e.viewport.width, e.viewport.height,
        );
    }

    fn on_display_changed(&mut self, e: &DisplayChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[display:changed] tick={} display={}",
            e.tick, e.display.0,
        );
    }

    fn on_geometry_applied(&mut self, e: &GeometryAppliedEvent) {
        let _ = writeln!(
            self.writer,
            "[apply] tick={} rotation={}deg viewport={}x{}",
            e.tick,
            e.rotation.degrees(),
            e.viewport.width,
            e.viewport.height,
        );
    }
}
