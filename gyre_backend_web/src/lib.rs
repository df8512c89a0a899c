// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for gyre.
//!
//! This crate integrates the browser's screen-orientation APIs with the
//! [`gyre_core`] seams:
//!
//! - [`WebDisplay`] implements
//!   [`DisplayHandle`](gyre_core::display::DisplayHandle) over
//!   `screen.orientation.angle`.
//! - [`OrientationWatcher`] implements
//!   [`DisplayService`](gyre_core::backend::DisplayService), registering
//!   `change` and `resize` listeners and queuing
//!   [`DisplayEvent`](gyre_core::display::DisplayEvent)s for the host's
//!   frame loop to [`drain`](OrientationWatcher::drain).
//!
//! Platform failures surface as raw [`JsValue`](wasm_bindgen::JsValue)
//! errors, per the core contract.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

use wasm_bindgen::JsValue;
use web_sys::{ScreenOrientation, Window};

mod display;
mod watcher;

pub use display::WebDisplay;
pub use watcher::OrientationWatcher;

/// Resolves the window and its screen-orientation object.
///
/// Fails outside a window context (e.g. a worker).
pub(crate) fn screen_orientation() -> Result<(Window, ScreenOrientation), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let orientation = window.screen()?.orientation();
    Ok((window, orientation))
}
