// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Android backend for gyre.
//!
//! This crate will provide integration with Android display APIs:
//!
//! - `DisplayManager` display-listener registration bracketing the
//!   activity's resume/pause
//! - `Display.getRotation()` rotation query
//! - ARCore `Session.setDisplayGeometry` sink for the GL surface's
//!   viewport
