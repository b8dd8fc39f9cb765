// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inbound callbacks: controller notifications relayed to the view layer.
//!
//! The controller calls into [`CallbackRelay`] from whatever thread it runs
//! on. Overscroll updates are UI-thread-affine: if the call already arrives
//! on the UI thread they are applied synchronously, otherwise they are posted
//! to the [`UiTaskQueue`] and applied on the next drain. Pin-state changes
//! and repaint requests go straight to the view regardless of thread; the
//! view tolerates that (see [`PanZoomView`]).
//!
//! The relay holds the overscroll handler behind a mutex-guarded slot that is
//! re-read at delivery time, so a handler replaced between enqueue and drain
//! sees last-set-wins. The relay never consults the bridge's destroyed flag:
//! a disposed controller simply stops calling.

use std::sync::Arc;

use parking_lot::Mutex;
use skidway_viewport::DisplayPort;

use crate::engine::{Axis, OverscrollHandler, PanZoomView, PinReason};
use crate::task_queue::UiTaskQueue;

/// Velocity values cross the boundary in pixels per millisecond; handlers
/// take pixels per second.
const VELOCITY_SCALE: f64 = 1000.0;

struct Shared {
    view: Arc<dyn PanZoomView>,
    queue: Arc<UiTaskQueue>,
    handler: Mutex<Option<Box<dyn OverscrollHandler>>>,
}

/// Cloneable, `Send` handle the controller uses to call back into the view
/// layer.
#[derive(Clone)]
pub struct CallbackRelay {
    shared: Arc<Shared>,
}

impl CallbackRelay {
    /// Creates a relay serving `view`, deferring onto `queue`.
    #[must_use]
    pub fn new(view: Arc<dyn PanZoomView>, queue: Arc<UiTaskQueue>) -> Self {
        Self {
            shared: Arc::new(Shared {
                view,
                queue,
                handler: Mutex::new(None),
            }),
        }
    }

    /// Replaces the overscroll handler; last set wins. `None` drops all
    /// subsequent overscroll updates.
    pub fn set_overscroll_handler(&self, handler: Option<Box<dyn OverscrollHandler>>) {
        *self.shared.handler.lock() = handler;
    }

    /// Controller callback: overscroll velocity changed.
    ///
    /// `x`/`y` are in pixels per millisecond; the handler receives them
    /// scaled to pixels per second, X axis first. Dropped silently when no
    /// handler is registered.
    pub fn update_overscroll_velocity(&self, x: f64, y: f64) {
        if self.shared.handler.lock().is_none() {
            return;
        }
        if self.shared.queue.is_current() {
            if let Some(handler) = self.shared.handler.lock().as_mut() {
                handler.set_velocity(x * VELOCITY_SCALE, Axis::X);
                handler.set_velocity(y * VELOCITY_SCALE, Axis::Y);
            }
        } else {
            let shared = Arc::clone(&self.shared);
            self.shared.queue.post(move || {
                if let Some(handler) = shared.handler.lock().as_mut() {
                    handler.set_velocity(x * VELOCITY_SCALE, Axis::X);
                    handler.set_velocity(y * VELOCITY_SCALE, Axis::Y);
                }
            });
        }
    }

    /// Controller callback: overscroll distance changed.
    ///
    /// Values are forwarded unscaled, X axis first. Dropped silently when no
    /// handler is registered.
    pub fn update_overscroll_offset(&self, x: f64, y: f64) {
        if self.shared.handler.lock().is_none() {
            return;
        }
        if self.shared.queue.is_current() {
            if let Some(handler) = self.shared.handler.lock().as_mut() {
                handler.set_distance(x, Axis::X);
                handler.set_distance(y, Axis::Y);
            }
        } else {
            let shared = Arc::clone(&self.shared);
            self.shared.queue.post(move || {
                if let Some(handler) = shared.handler.lock().as_mut() {
                    handler.set_distance(x, Axis::X);
                    handler.set_distance(y, Axis::Y);
                }
            });
        }
    }

    /// Controller callback: a selection caret drag started or ended.
    ///
    /// The toolbar is pinned while the caret is being dragged so that
    /// scrolling cannot collapse it mid-drag. Forwarded to the view from any
    /// thread.
    pub fn on_selection_drag_state(&self, dragging: bool) {
        self.shared
            .view
            .set_toolbar_pinned(dragging, PinReason::CaretDrag);
    }

    /// Controller callback: repaint the given content region.
    ///
    /// Translated into a [`DisplayPort`] spanning `(x, y)` to
    /// `(x + width, y + height)` and forwarded to the view from any thread.
    pub fn request_content_repaint(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        resolution: f64,
    ) {
        self.shared
            .view
            .force_redraw(DisplayPort::from_origin_size(x, y, width, height, resolution));
    }
}

impl core::fmt::Debug for CallbackRelay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallbackRelay")
            .field("has_handler", &self.shared.handler.lock().is_some())
            .finish()
    }
}
