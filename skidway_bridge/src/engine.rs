// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seams the bridge sits between: controller, view, overscroll handler.
//!
//! The bridge owns no pan-zoom behavior of its own. Everything interesting
//! happens behind [`PanZoomEngine`] (the external controller that decides
//! fling/overscroll/zoom) and [`PanZoomView`] (the host view that renders and
//! owns the toolbar). These traits pin down exactly what crosses each
//! boundary.

use kurbo::Vec2;
use skidway_viewport::{DisplayPort, ViewportMetrics};

use crate::extract::{MotionBatch, ScrollSample};

/// The external asynchronous pan-zoom controller.
///
/// Implementations receive extracted primitive data and report whether they
/// consumed it. The bridge forwards the boolean unchanged and never retries;
/// interpretation of `false` belongs to the caller.
pub trait PanZoomEngine: Send {
    /// Handles a flattened motion event. Returns `true` if consumed.
    fn handle_motion_batch(&mut self, batch: &MotionBatch) -> bool;

    /// Handles a reduced scroll event. Returns `true` if consumed.
    fn handle_scroll(&mut self, sample: &ScrollSample) -> bool;

    /// Aborts any animation the controller is currently running.
    fn abort_animation(&mut self);

    /// Enables or disables long-press gesture recognition.
    fn set_longpress_enabled(&mut self, enabled: bool);

    /// Notifies the controller that the rendering surface shifted by `shift`.
    fn adjust_scroll_for_surface_shift(&mut self, shift: Vec2);
}

/// Why the toolbar is being pinned.
///
/// Several features pin the toolbar independently; views track reasons
/// separately so one feature releasing its pin does not unpin another's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinReason {
    /// A selection caret is being dragged; scrolling the toolbar away would
    /// fight the drag. The relay's pin-state callback always uses this.
    CaretDrag,
    /// A contextual action mode (text selection toolbar) is active.
    ActionMode,
    /// Content has entered full-screen.
    FullScreen,
}

/// The host view the bridge serves.
///
/// Pin and redraw requests may arrive from the controller's thread; view
/// implementations must tolerate being called off the UI thread for those two
/// operations.
pub trait PanZoomView: Send + Sync {
    /// Returns the view's current viewport metrics.
    fn viewport_metrics(&self) -> ViewportMetrics;

    /// Forces a redraw of the given display port.
    fn force_redraw(&self, display_port: DisplayPort);

    /// Pins or unpins the view's dynamic toolbar.
    fn set_toolbar_pinned(&self, pinned: bool, reason: PinReason);
}

/// Scroll axis, for per-axis overscroll updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

/// Receiver for overscroll state reported by the controller.
///
/// Handlers are UI-thread-affine: the relay delivers updates on the UI thread
/// only (see [`CallbackRelay`](crate::CallbackRelay)).
pub trait OverscrollHandler: Send {
    /// Sets the overscroll velocity on one axis, in pixels per second.
    fn set_velocity(&mut self, velocity: f64, axis: Axis);

    /// Sets the overscroll distance on one axis, in pixels.
    fn set_distance(&mut self, distance: f64, axis: Axis);
}
