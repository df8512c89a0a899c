// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-rotation tracking and geometry types for AR session integration.
//!
//! `gyre_core` provides the data model and the tracker that keep an external
//! AR session's display geometry current. The session maps camera and
//! tracking coordinates to screen space, so it must be told the viewport
//! size and screen rotation whenever either changes. Platform backends
//! deliver the change notifications; the tracker latches them and applies
//! them lazily from the render loop.
//!
//! # Architecture
//!
//! The crate is organized around a draw loop that turns platform display
//! notifications into at-most-one geometry push per change:
//!
//! ```text
//!   Backend (event source)              Host surface callback
//!       │                                     │
//!       ▼                                     ▼
//!   DisplayEvent ──► RotationTracker ◄── on_surface_changed(viewport)
//!                         │ (Clean → Dirty)
//!                         ▼
//!   update_session_if_needed() ──► GeometrySink::set_display_geometry()
//!                         │ (Dirty → Clean)
//!                         ▼
//!                  DisplayGeometry (what was pushed)
//! ```
//!
//! **[`rotation`]** — The quarter-turn screen orientation enum.
//!
//! **[`geometry`]** — [`Viewport`](geometry::Viewport) and
//! [`DisplayGeometry`](geometry::DisplayGeometry), plus the normalized
//! surface transform for the current rotation.
//!
//! **[`display`]** — [`DisplayId`](display::DisplayId), the
//! [`DisplayEvent`](display::DisplayEvent) callback enum, and the
//! [`DisplayHandle`](display::DisplayHandle) /
//! [`DisplayService`](display::DisplayService) seams backends implement.
//!
//! **[`session`]** — The [`GeometrySink`](session::GeometrySink) trait that
//! external AR session wrappers implement.
//!
//! **[`tracker`]** — The [`RotationTracker`](tracker::RotationTracker)
//! state machine.
//!
//! **[`backend`]** — The contract platform backend crates fulfill.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for geometry-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod backend;
pub mod display;
pub mod geometry;
pub mod rotation;
pub mod session;
pub mod trace;
pub mod tracker;
