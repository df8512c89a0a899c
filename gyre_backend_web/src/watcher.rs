// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation-change event source.
//!
//! [`OrientationWatcher`] owns the listener registrations for
//! `screen.orientation`'s `change` event and the window's `resize` event.
//! Both funnel into one queue of
//! [`DisplayEvent::Changed`](gyre_core::display::DisplayEvent::Changed)
//! values: a resize is a metrics change of the one display the browser
//! exposes, and the tracker treats any change the same way.
//!
//! The JS callback only enqueues; the host drains the queue on its own
//! frame loop and feeds the events to the tracker. This keeps all tracker
//! mutation on the loop that also calls
//! `update_session_if_needed`.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use web_sys::{ScreenOrientation, Window};

use gyre_core::backend::DisplayService;
use gyre_core::display::{DisplayEvent, DisplayId};

type ChangeClosure = Closure<dyn FnMut()>;

/// Watches the browser for orientation and resize changes.
///
/// Create with [`OrientationWatcher::new`], subscribe through the
/// [`DisplayService`] impl (normally via the tracker's `on_resume`), and
/// call [`drain`](Self::drain) each frame. Dropping the watcher removes
/// any live listeners.
pub struct OrientationWatcher {
    inner: Rc<WatcherInner>,
}

struct WatcherInner {
    /// The orientation object listeners are attached to.
    orientation: ScreenOrientation,

    /// The window, for the `resize` listener.
    window: Window,

    /// The JS closure registered for both events.
    ///
    /// Stored so `unsubscribe` can remove exactly the listener that was
    /// added, and so the closure outlives its registrations.
    closure: RefCell<Option<ChangeClosure>>,

    /// Events queued by the JS callback, drained by the host loop.
    pending: RefCell<VecDeque<DisplayEvent>>,

    /// The display id stamped on queued events.
    display: DisplayId,

    /// Whether listeners are currently registered.
    registered: Cell<bool>,
}

impl OrientationWatcher {
    /// Creates a watcher that is **not yet subscribed**.
    ///
    /// `display` identifies the browser's single screen in queued events.
    ///
    /// # Errors
    ///
    /// Fails with the browser's raw error outside a window context.
    pub fn new(display: DisplayId) -> Result<Self, JsValue> {
        let (window, orientation) = crate::screen_orientation()?;
        Ok(Self {
            inner: Rc::new(WatcherInner {
                orientation,
                window,
                closure: RefCell::new(None),
                pending: RefCell::new(VecDeque::new()),
                display,
                registered: Cell::new(false),
            }),
        })
    }

    /// Returns `true` if listeners are currently registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.inner.registered.get()
    }

    /// Hands all queued events to `consume`, oldest first.
    ///
    /// Call once per frame, before the tracker's geometry check.
    pub fn drain(&self, mut consume: impl FnMut(DisplayEvent)) {
        // Take the whole queue in one borrow so a re-entrant JS event
        // landing during `consume` goes into the next frame's batch.
        let drained: VecDeque<DisplayEvent> = self.inner.pending.borrow_mut().split_off(0);
        for event in drained {
            consume(event);
        }
    }

    fn add_listeners(&self) -> Result<(), JsValue> {
        if let Some(ref closure) = *self.inner.closure.borrow() {
            self.inner
                .orientation
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
            self.inner
                .window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn remove_listeners(inner: &WatcherInner) -> Result<(), JsValue> {
        if let Some(closure) = inner.closure.borrow_mut().take() {
            inner
                .orientation
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
            inner
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        }
        inner.registered.set(false);
        Ok(())
    }
}

impl DisplayService for OrientationWatcher {
    type Error = JsValue;

    /// Registers the `change` and `resize` listeners.
    ///
    /// The browser exposes one screen, so the display argument is not
    /// consulted; queued events carry the id given at construction.
    /// Subscribing an already-subscribed watcher is a no-op.
    fn subscribe(&mut self, _display: DisplayId) -> Result<(), JsValue> {
        if self.inner.registered.get() {
            return Ok(());
        }

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            inner
                .pending
                .borrow_mut()
                .push_back(DisplayEvent::Changed(inner.display));
        }) as Box<dyn FnMut()>);
        *self.inner.closure.borrow_mut() = Some(closure);

        let added = self.add_listeners();
        if added.is_err() {
            // Unwind the half-registered state; the original error wins.
            let _ = Self::remove_listeners(&self.inner);
            return added;
        }

        self.inner.registered.set(true);
        Ok(())
    }

    /// Removes the listeners added by [`subscribe`](Self::subscribe).
    ///
    /// Unsubscribing an unsubscribed watcher is a no-op, matching the
    /// browser's tolerance for removing an absent listener.
    fn unsubscribe(&mut self, _display: DisplayId) -> Result<(), JsValue> {
        Self::remove_listeners(&self.inner)
    }
}

impl Drop for OrientationWatcher {
    fn drop(&mut self) {
        // Listener removal can only fail on a dead window; nothing to do
        // about it during drop.
        let _ = Self::remove_listeners(&self.inner);
    }
}

impl core::fmt::Debug for OrientationWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrientationWatcher")
            .field("display", &self.inner.display)
            .field("registered", &self.inner.registered.get())
            .field("pending", &self.inner.pending.borrow().len())
            .finish_non_exhaustive()
    }
}
