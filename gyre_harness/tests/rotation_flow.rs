// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tracker flows over the harness doubles.

use gyre_core::display::{DisplayEvent, DisplayHandle, DisplayId};
use gyre_core::geometry::{DisplayGeometry, Viewport};
use gyre_core::rotation::Rotation;
use gyre_core::tracker::{RotationTracker, TrackerState};

use gyre_harness::{CountingService, RecordingSession, ScriptedDisplay, ServiceUnavailable};

fn tracker() -> (ScriptedDisplay, RotationTracker<ScriptedDisplay>) {
    let display = ScriptedDisplay::new(DisplayId(0));
    let tracker = RotationTracker::new(display.clone());
    (display, tracker)
}

#[test]
fn surface_change_reaches_session_exactly_once() {
    let (_display, mut tracker) = tracker();
    let mut session = RecordingSession::new();

    tracker.on_surface_changed(Viewport::new(1080, 1920));
    tracker.update_session_if_needed(&mut session);
    tracker.update_session_if_needed(&mut session);

    assert_eq!(
        session.pushes(),
        [DisplayGeometry::new(
            Rotation::Deg0,
            Viewport::new(1080, 1920)
        )]
    );
    assert_eq!(tracker.state(), TrackerState::Clean);
}

#[test]
fn no_change_means_no_session_calls() {
    let (_display, mut tracker) = tracker();
    let mut session = RecordingSession::new();

    for _ in 0..10 {
        tracker.update_session_if_needed(&mut session);
    }
    assert_eq!(session.push_count(), 0);
}

#[test]
fn rotation_change_between_ticks_is_observed_at_apply_time() {
    let (display, mut tracker) = tracker();
    let mut session = RecordingSession::new();

    tracker.on_surface_changed(Viewport::new(1080, 1920));
    tracker.update_session_if_needed(&mut session);

    // The device rotates; the platform reports a display change, and the
    // surface callback delivers transposed dimensions.
    display.set_rotation(Rotation::Deg90);
    tracker.on_display_event(DisplayEvent::Changed(display.id()));
    tracker.on_surface_changed(Viewport::new(1920, 1080));
    tracker.update_session_if_needed(&mut session);

    assert_eq!(
        session.pushes(),
        [
            DisplayGeometry::new(Rotation::Deg0, Viewport::new(1080, 1920)),
            DisplayGeometry::new(Rotation::Deg90, Viewport::new(1920, 1080)),
        ]
    );
}

#[test]
fn display_change_without_surface_change_pushes_stale_viewport() {
    let (display, mut tracker) = tracker();
    let mut session = RecordingSession::new();

    tracker.on_surface_changed(Viewport::new(640, 480));
    tracker.update_session_if_needed(&mut session);

    // A half-turn rotation keeps the dimensions; only the rotation moves.
    display.set_rotation(Rotation::Deg180);
    tracker.on_display_event(DisplayEvent::Changed(display.id()));
    tracker.update_session_if_needed(&mut session);

    assert_eq!(session.push_count(), 2);
    assert_eq!(
        session.pushes()[1],
        DisplayGeometry::new(Rotation::Deg180, Viewport::new(640, 480))
    );
}

#[test]
fn added_and_removed_events_are_ignored_end_to_end() {
    let (_display, mut tracker) = tracker();
    let mut session = RecordingSession::new();

    tracker.on_display_event(DisplayEvent::Added(DisplayId(5)));
    tracker.on_display_event(DisplayEvent::Removed(DisplayId(5)));
    tracker.update_session_if_needed(&mut session);

    assert_eq!(session.push_count(), 0);
}

#[test]
fn resume_pause_bracket_is_balanced() {
    let (_display, mut tracker) = tracker();
    let mut service = CountingService::new();

    tracker.on_resume(&mut service).unwrap();
    tracker.on_pause(&mut service).unwrap();
    tracker.on_resume(&mut service).unwrap();
    tracker.on_pause(&mut service).unwrap();

    assert!(service.is_balanced());
    assert_eq!(service.subscribes(), 2);
}

#[test]
fn resume_failure_propagates_and_leaves_tracker_clean() {
    let (_display, mut tracker) = tracker();
    let mut service = CountingService::new();
    service.fail_next();

    assert_eq!(tracker.on_resume(&mut service), Err(ServiceUnavailable));
    assert_eq!(tracker.state(), TrackerState::Clean);
    assert_eq!(service.subscribes(), 0);
}

#[test]
fn pause_failure_propagates() {
    let (_display, mut tracker) = tracker();
    let mut service = CountingService::new();

    tracker.on_resume(&mut service).unwrap();
    service.fail_next();
    assert_eq!(tracker.on_pause(&mut service), Err(ServiceUnavailable));
}

#[test]
fn full_lifecycle_scenario() {
    let (display, mut tracker) = tracker();
    let mut service = CountingService::new();
    let mut session = RecordingSession::new();

    tracker.on_resume(&mut service).unwrap();
    tracker.on_surface_changed(Viewport::new(1080, 1920));

    // Sixty draw ticks with one mid-run rotation.
    for tick in 0..60_u32 {
        if tick == 30 {
            display.set_rotation(Rotation::Deg270);
            tracker.on_display_event(DisplayEvent::Changed(display.id()));
            tracker.on_surface_changed(Viewport::new(1920, 1080));
        }
        tracker.update_session_if_needed(&mut session);
    }

    tracker.on_pause(&mut service).unwrap();

    assert_eq!(session.push_count(), 2, "one push per latched change");
    assert!(service.is_balanced());
}
