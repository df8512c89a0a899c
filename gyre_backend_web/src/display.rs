// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation query over `screen.orientation`.

use wasm_bindgen::JsValue;
use web_sys::ScreenOrientation;

use gyre_core::display::{DisplayHandle, DisplayId};
use gyre_core::rotation::Rotation;

/// A [`DisplayHandle`] backed by the browser's `screen.orientation`.
///
/// The orientation object is resolved once at construction, so the
/// per-frame rotation query is a plain property read.
#[derive(Clone, Debug)]
pub struct WebDisplay {
    id: DisplayId,
    orientation: ScreenOrientation,
}

impl WebDisplay {
    /// Resolves the window's screen orientation.
    ///
    /// # Errors
    ///
    /// Fails with the browser's raw error outside a window context or when
    /// the screen object is unavailable.
    pub fn new(id: DisplayId) -> Result<Self, JsValue> {
        let (_window, orientation) = crate::screen_orientation()?;
        Ok(Self { id, orientation })
    }
}

impl DisplayHandle for WebDisplay {
    fn id(&self) -> DisplayId {
        self.id
    }

    /// Reads `screen.orientation.angle`.
    ///
    /// Browsers report the angle as 0, 90, 180, or 270; an out-of-contract
    /// value maps to the natural orientation rather than failing the
    /// infallible query seam.
    fn rotation(&self) -> Rotation {
        Rotation::from_degrees(u32::from(self.orientation.angle())).unwrap_or(Rotation::Deg0)
    }
}
