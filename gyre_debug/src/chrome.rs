// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of instant-event objects, suitable
/// for loading into `chrome://tracing` or
/// [Perfetto](https://ui.perfetto.dev/).
///
/// Trace events carry a draw-tick counter rather than wall-clock time;
/// `tick_interval_us` converts ticks to the format's microsecond
/// timestamps (e.g. `16_667` for a 60 Hz loop).
pub fn export(bytes: &[u8], tick_interval_us: u64, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Subscription(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.kind),
                    "cat": "Lifecycle",
                    "ts": e.tick * tick_interval_us,
                    "pid": e.display.0,
                    "tid": 0,
                    "s": "g",
                }));
            }
            RecordedEvent::SurfaceChanged(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "SurfaceChanged",
                    "cat": "Geometry",
                    "ts": e.tick * tick_interval_us,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "width": e.viewport.width,
                        "height": e.viewport.height,
                    }
                }));
            }
            RecordedEvent::DisplayChanged(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "DisplayChanged",
                    "cat": "Geometry",
                    "ts": e.tick * tick_interval_us,
                    "pid": e.display.0,
                    "tid": 0,
                    "s": "g",
                }));
            }
            RecordedEvent::GeometryApplied(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "GeometryApplied",
                    "cat": "Geometry",
                    "ts": e.tick * tick_interval_us,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "rotation_deg": e.rotation.degrees(),
                        "width": e.viewport.width,
                        "height": e.viewport.height,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(&mut *writer, &events)
        .map_err(io::Error::other)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use gyre_core::geometry::Viewport;
    use gyre_core::rotation::Rotation;
    use gyre_core::trace::{GeometryAppliedEvent, TraceSink};

    use crate::recorder::RecorderSink;

    #[test]
    fn export_produces_valid_json_array() {
        let mut sink = RecorderSink::new();
        sink.on_geometry_applied(&GeometryAppliedEvent {
            tick: 2,
            rotation: Rotation::Deg90,
            viewport: Viewport::new(1080, 1920),
        });

        let mut out = Vec::new();
        export(sink.as_bytes(), 16_667, &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "GeometryApplied");
        assert_eq!(array[0]["ts"], 2 * 16_667);
        assert_eq!(array[0]["args"]["rotation_deg"], 90);
    }

    #[test]
    fn export_empty_recording_is_empty_array() {
        let mut out = Vec::new();
        export(&[], 1, &mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
