// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them
//! back as an iterator of [`RecordedEvent`]. Decoding stops at the first
//! truncated or unknown record.

use gyre_core::display::DisplayId;
use gyre_core::geometry::Viewport;
use gyre_core::rotation::Rotation;
use gyre_core::trace::{
    DisplayChangedEvent, GeometryAppliedEvent, SubscriptionEvent, SubscriptionKind,
    SurfaceChangedEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SUBSCRIPTION: u8 = 1;
const TAG_SURFACE_CHANGED: u8 = 2;
const TAG_DISPLAY_CHANGED: u8 = 3;
const TAG_GEOMETRY_APPLIED: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_kind(&mut self, kind: SubscriptionKind) {
        self.write_u8(match kind {
            SubscriptionKind::Subscribe => 0,
            SubscriptionKind::Unsubscribe => 1,
        });
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "rotation index is 0..=3 and fits in u8"
    )]
    fn write_rotation(&mut self, rotation: Rotation) {
        self.write_u8(rotation.index() as u8);
    }
}

impl TraceSink for RecorderSink {
    fn on_subscription(&mut self, e: &SubscriptionEvent) {
        self.write_u8(TAG_SUBSCRIPTION);
        self.write_u64(e.tick);
        self.write_kind(e.kind);
        self.write_u32(e.display.0);
    }

    fn on_surface_changed(&mut self, e: &SurfaceChangedEvent) {
        self.write_u8(TAG_SURFACE_CHANGED);
        self.write_u64(e.tick);
        self.write_u32(e.viewport.width);
        self.write_u32(e.viewport.height);
    }

    fn on_display_changed(&mut self, e: &DisplayChangedEvent) {
        self.write_u8(TAG_DISPLAY_CHANGED);
        self.write_u64(e.tick);
        self.write_u32(e.display.0);
    }

    fn on_geometry_applied(&mut self, e: &GeometryAppliedEvent) {
        self.write_u8(TAG_GEOMETRY_APPLIED);
        self.write_u64(e.tick);
        self.write_rotation(e.rotation);
        self.write_u32(e.viewport.width);
        self.write_u32(e.viewport.height);
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// A decoded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A subscribe/unsubscribe record.
    Subscription(SubscriptionEvent),
    /// A surface-changed record.
    SurfaceChanged(SurfaceChangedEvent),
    /// A display-changed record.
    DisplayChanged(DisplayChangedEvent),
    /// A geometry-applied record.
    GeometryApplied(GeometryAppliedEvent),
}

/// Decodes recorded bytes into an iterator of [`RecordedEvent`].
#[must_use]
pub fn decode(bytes: &[u8]) -> Decoder<'_> {
    Decoder { bytes, pos: 0 }
}

/// Iterator over recorded events; see [`decode`].
#[derive(Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Decoder<'_> {
    fn read_u8(&mut self) -> Option<u8> {
        let v = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let slice = self.bytes.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_le_bytes(slice.try_into().ok()?))
    }

    fn read_u64(&mut self) -> Option<u64> {
        let slice = self.bytes.get(self.pos..self.pos + 8)?;
        self.pos += 8;
        Some(u64::from_le_bytes(slice.try_into().ok()?))
    }

    fn read_kind(&mut self) -> Option<SubscriptionKind> {
        match self.read_u8()? {
            0 => Some(SubscriptionKind::Subscribe),
            1 => Some(SubscriptionKind::Unsubscribe),
            _ => None,
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<RecordedEvent> {
        let tag = self.read_u8()?;
        let tick = self.read_u64()?;
        match tag {
            TAG_SUBSCRIPTION => {
                let kind = self.read_kind()?;
                let display = DisplayId(self.read_u32()?);
                Some(RecordedEvent::Subscription(SubscriptionEvent {
                    tick,
                    kind,
                    display,
                }))
            }
            TAG_SURFACE_CHANGED => {
                let width = self.read_u32()?;
                let height = self.read_u32()?;
                Some(RecordedEvent::SurfaceChanged(SurfaceChangedEvent {
                    tick,
                    viewport: Viewport::new(width, height),
                }))
            }
            TAG_DISPLAY_CHANGED => {
                let display = DisplayId(self.read_u32()?);
                Some(RecordedEvent::DisplayChanged(DisplayChangedEvent {
                    tick,
                    display,
                }))
            }
            TAG_GEOMETRY_APPLIED => {
                let rotation = Rotation::from_index(u32::from(self.read_u8()?));
                let width = self.read_u32()?;
                let height = self.read_u32()?;
                Some(RecordedEvent::GeometryApplied(GeometryAppliedEvent {
                    tick,
                    rotation,
                    viewport: Viewport::new(width, height),
                }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_event_kinds() {
        let mut sink = RecorderSink::new();
        sink.on_subscription(&SubscriptionEvent {
            tick: 0,
            kind: SubscriptionKind::Subscribe,
            display: DisplayId(1),
        });
        sink.on_surface_changed(&SurfaceChangedEvent {
            tick: 1,
            viewport: Viewport::new(1080, 1920),
        });
        sink.on_display_changed(&DisplayChangedEvent {
            tick: 30,
            display: DisplayId(1),
        });
        sink.on_geometry_applied(&GeometryAppliedEvent {
            tick: 30,
            rotation: Rotation::Deg270,
            viewport: Viewport::new(1920, 1080),
        });

        let events: Vec<RecordedEvent> = decode(sink.as_bytes()).collect();
        assert_eq!(events.len(), 4);

        match events[0] {
            RecordedEvent::Subscription(e) => {
                assert_eq!(e.kind, SubscriptionKind::Subscribe);
                assert_eq!(e.display, DisplayId(1));
            }
            ref other => panic!("expected subscription, got {other:?}"),
        }
        match events[3] {
            RecordedEvent::GeometryApplied(e) => {
                assert_eq!(e.tick, 30);
                assert_eq!(e.rotation, Rotation::Deg270);
                assert_eq!(e.viewport, Viewport::new(1920, 1080));
            }
            ref other => panic!("expected geometry apply, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut sink = RecorderSink::new();
        sink.on_display_changed(&DisplayChangedEvent {
            tick: 5,
            display: DisplayId(0),
        });
        let mut bytes = sink.into_bytes();
        bytes.truncate(bytes.len() - 1);

        assert_eq!(decode(&bytes).count(), 0);
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        let bytes = [0xff_u8; 16];
        assert_eq!(decode(&bytes).count(), 0);
    }
}
