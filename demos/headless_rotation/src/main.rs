// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated rotation-tracking run that exercises the tracing pipeline.
//!
//! Drives a [`RotationTracker`] over the harness doubles through a resume →
//! surface-changed → draw-tick → pause lifecycle with two mid-run device
//! rotations, recording events to both a
//! [`PrettyPrintSink`](gyre_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](gyre_debug::recorder::RecorderSink), then exports a
//! Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use gyre_core::display::{DisplayEvent, DisplayHandle, DisplayId};
use gyre_core::geometry::Viewport;
use gyre_core::rotation::Rotation;
use gyre_core::trace::{
    DisplayChangedEvent, GeometryAppliedEvent, SubscriptionEvent, SubscriptionKind,
    SurfaceChangedEvent, TraceSink,
};
use gyre_core::tracker::RotationTracker;

use gyre_harness::{CountingService, RecordingSession, ScriptedDisplay};

use gyre_debug::chrome;
use gyre_debug::pretty::PrettyPrintSink;
use gyre_debug::recorder::RecorderSink;

const TICK_COUNT: u64 = 60;
/// 16.7ms per tick in microseconds (≈60 Hz), for the Chrome trace timeline.
const TICK_INTERVAL_US: u64 = 16_667;

/// Draw ticks at which the scripted device rotates, with the rotation and
/// the surface dimensions the host callback would deliver.
const ROTATION_SCRIPT: [(u64, Rotation, Viewport); 2] = [
    (20, Rotation::Deg90, Viewport::new(1920, 1080)),
    (45, Rotation::Deg180, Viewport::new(1080, 1920)),
];

fn main() -> ExitCode {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- doubles -----------------------------------------------------------
    let display = ScriptedDisplay::new(DisplayId(0));
    let mut tracker = RotationTracker::new(display.clone());
    let mut service = CountingService::new();
    let mut session = RecordingSession::new();

    // -- resume ------------------------------------------------------------
    if let Err(err) = tracker.on_resume(&mut service) {
        eprintln!("display service rejected registration: {err}");
        return ExitCode::FAILURE;
    }
    emit_subscription(&mut pretty, &mut recorder, 0, SubscriptionKind::Subscribe);

    // Initial surface callback, portrait.
    tracker.on_surface_changed(Viewport::new(1080, 1920));
    let surface = SurfaceChangedEvent {
        tick: 0,
        viewport: tracker.viewport(),
    };
    pretty.on_surface_changed(&surface);
    recorder.on_surface_changed(&surface);

    // -- draw loop ---------------------------------------------------------
    for tick in 0..TICK_COUNT {
        for (at, rotation, viewport) in ROTATION_SCRIPT {
            if tick == at {
                display.set_rotation(rotation);
                tracker.on_display_event(DisplayEvent::Changed(display.id()));
                let changed = DisplayChangedEvent {
                    tick,
                    display: display.id(),
                };
                pretty.on_display_changed(&changed);
                recorder.on_display_changed(&changed);

                tracker.on_surface_changed(viewport);
                let surface = SurfaceChangedEvent { tick, viewport };
                pretty.on_surface_changed(&surface);
                recorder.on_surface_changed(&surface);
            }
        }

        if let Some(geometry) = tracker.update_session_if_needed(&mut session) {
            let applied = GeometryAppliedEvent::new(tick, &geometry);
            pretty.on_geometry_applied(&applied);
            recorder.on_geometry_applied(&applied);
        }
    }

    // -- pause -------------------------------------------------------------
    if let Err(err) = tracker.on_pause(&mut service) {
        eprintln!("display service rejected unregistration: {err}");
        return ExitCode::FAILURE;
    }
    emit_subscription(
        &mut pretty,
        &mut recorder,
        TICK_COUNT,
        SubscriptionKind::Unsubscribe,
    );

    println!(
        "session received {} geometry pushes over {TICK_COUNT} ticks; bracket balanced: {}",
        session.push_count(),
        service.is_balanced(),
    );

    // -- export ------------------------------------------------------------
    let path = "headless_rotation_trace.json";
    match File::create(path) {
        Ok(file) => {
            let mut writer = BufWriter::new(file);
            if let Err(err) = chrome::export(recorder.as_bytes(), TICK_INTERVAL_US, &mut writer) {
                eprintln!("failed to export chrome trace: {err}");
                return ExitCode::FAILURE;
            }
            println!("chrome trace written to {path}");
        }
        Err(err) => {
            eprintln!("failed to create {path}: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn emit_subscription(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    tick: u64,
    kind: SubscriptionKind,
) {
    let event = SubscriptionEvent {
        tick,
        kind,
        display: DisplayId(0),
    };
    pretty.on_subscription(&event);
    recorder.on_subscription(&event);
}
