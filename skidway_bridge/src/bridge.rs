// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bridge proper: gated dispatch into the external controller.
//!
//! [`PanZoomBridge`] owns the controller handle for the lifetime of one view.
//! Every outbound operation is gated on two things: the destroyed flag
//! (everything after [`destroy`](PanZoomBridge::destroy) is a silent no-op)
//! and, for motion events, the gesture epoch (events whose down-timestamp
//! does not match the gesture in progress are rejected). Failures are
//! absorbed as "event not consumed": no operation here panics or returns an
//! error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use kurbo::Vec2;
use parking_lot::Mutex;
use skidway_viewport::ViewportMetrics;

use crate::engine::{OverscrollHandler, PanZoomEngine, PanZoomView};
use crate::event::{CoordinateSpace, MotionAction, MotionEvent};
use crate::extract::{MotionBatch, ScrollSample};
use crate::prefs::{NEGATE_WHEEL_SCROLL_PREF, PrefRegistry};
use crate::relay::CallbackRelay;
use crate::task_queue::UiTaskQueue;

/// Display metrics of the host, used to derive the pointer-scroll factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostMetrics {
    /// The platform's preferred list-item height in pixels, if it exposes
    /// one. Non-positive values are treated as absent.
    pub list_item_height: Option<f64>,
    /// Display density in dots per inch.
    pub dpi: f64,
}

impl HostMetrics {
    /// Pixels scrolled per wheel unit: the preferred list-item height when
    /// available, else a density-derived fallback.
    #[must_use]
    pub fn pointer_scroll_factor(&self) -> f64 {
        match self.list_item_height {
            Some(height) if height > 0.0 => height,
            _ => 0.075 * self.dpi,
        }
    }
}

/// Per-view bridge between platform input and the external pan-zoom
/// controller.
///
/// Constructed once per view on the UI thread; event entry points are called
/// on the UI thread only. [`destroy`](Self::destroy) may be called from any
/// thread and is idempotent.
pub struct PanZoomBridge {
    view: Arc<dyn PanZoomView>,
    engine: Mutex<Option<Box<dyn PanZoomEngine>>>,
    destroyed: AtomicBool,
    last_down_time: AtomicU64,
    negate_wheel_scroll: Arc<AtomicBool>,
    pointer_scroll_factor: f64,
    relay: CallbackRelay,
}

impl PanZoomBridge {
    /// Creates a bridge serving `view`, driving `engine`.
    ///
    /// Registers an observer for [`NEGATE_WHEEL_SCROLL_PREF`] on `prefs`; the
    /// observer outlives the bridge (registry observers are never removed)
    /// but only touches a shared flag. The pointer-scroll factor is derived
    /// from `host` once, here.
    #[must_use]
    pub fn new(
        view: Arc<dyn PanZoomView>,
        engine: Box<dyn PanZoomEngine>,
        host: HostMetrics,
        prefs: &PrefRegistry,
        queue: Arc<UiTaskQueue>,
    ) -> Self {
        let negate_wheel_scroll = Arc::new(AtomicBool::new(
            prefs.get_bool(NEGATE_WHEEL_SCROLL_PREF).unwrap_or(false),
        ));
        {
            let flag = negate_wheel_scroll.clone();
            prefs.add_observer(&[NEGATE_WHEEL_SCROLL_PREF], move |_name, value| {
                log::debug!("negate wheel scroll -> {value}");
                flag.store(value, Ordering::SeqCst);
            });
        }
        let relay = CallbackRelay::new(view.clone(), queue);
        Self {
            view,
            engine: Mutex::new(Some(engine)),
            destroyed: AtomicBool::new(false),
            last_down_time: AtomicU64::new(0),
            negate_wheel_scroll,
            pointer_scroll_factor: host.pointer_scroll_factor(),
            relay,
        }
    }

    /// The relay handle to give the controller for its callbacks.
    #[must_use]
    pub fn relay(&self) -> CallbackRelay {
        self.relay.clone()
    }

    /// Replaces the overscroll handler; last set wins.
    pub fn set_overscroll_handler(&self, handler: Option<Box<dyn OverscrollHandler>>) {
        self.relay.set_overscroll_handler(handler);
    }

    /// The pixels-per-wheel-unit factor derived at construction.
    #[must_use]
    pub fn pointer_scroll_factor(&self) -> f64 {
        self.pointer_scroll_factor
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Touch entry point: extracts in view space and dispatches.
    pub fn on_touch_event(&self, event: &MotionEvent) -> bool {
        self.handle_motion_event(event, CoordinateSpace::View)
    }

    /// Generic-motion entry point: forwards scroll actions only.
    ///
    /// A scroll whose down-timestamp is older than the last accepted one is
    /// rejected; acceptance advances that watermark. Everything that is not a
    /// scroll reports not-handled.
    pub fn on_motion_event(&self, event: &MotionEvent) -> bool {
        if event.action == MotionAction::Scroll
            && event.down_time >= self.last_down_time.load(Ordering::SeqCst)
        {
            self.last_down_time.store(event.down_time, Ordering::SeqCst);
            return self.handle_scroll_event(event);
        }
        false
    }

    /// Extracts `event` in the given space and dispatches it.
    ///
    /// A down event starts a new gesture epoch keyed by its down-timestamp;
    /// any later event whose down-timestamp differs from the active epoch's
    /// is rejected without dispatch.
    pub fn handle_motion_event(&self, event: &MotionEvent, space: CoordinateSpace) -> bool {
        if self.is_destroyed() {
            log::trace!("motion event dropped: bridge destroyed");
            return false;
        }

        if event.action == MotionAction::Down {
            self.last_down_time.store(event.down_time, Ordering::SeqCst);
        } else if self.last_down_time.load(Ordering::SeqCst) != event.down_time {
            log::trace!("motion event dropped: stale gesture epoch");
            return false;
        }

        let batch = MotionBatch::from_event(event, &self.view.viewport_metrics(), space);
        match self.engine.lock().as_mut() {
            Some(engine) => engine.handle_motion_batch(&batch),
            None => false,
        }
    }

    fn handle_scroll_event(&self, event: &MotionEvent) -> bool {
        if self.is_destroyed() {
            log::trace!("scroll event dropped: bridge destroyed");
            return false;
        }
        let flip = if self.negate_wheel_scroll.load(Ordering::SeqCst) {
            -1.0
        } else {
            1.0
        };
        let Some(sample) = ScrollSample::from_event(event, flip, self.pointer_scroll_factor) else {
            log::trace!("scroll event dropped: no pointers");
            return false;
        };
        match self.engine.lock().as_mut() {
            Some(engine) => engine.handle_scroll(&sample),
            None => false,
        }
    }

    /// Aborts the controller's current animation. No-op once destroyed.
    pub fn abort_animation(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(engine) = self.engine.lock().as_mut() {
            engine.abort_animation();
        }
    }

    /// Enables or disables long-press recognition. No-op once destroyed.
    pub fn set_longpress_enabled(&self, enabled: bool) {
        if self.is_destroyed() {
            return;
        }
        if let Some(engine) = self.engine.lock().as_mut() {
            engine.set_longpress_enabled(enabled);
        }
    }

    /// Notifies the controller that the rendering surface shifted, and
    /// returns `metrics` offset by the same shift, clamped to the page.
    ///
    /// Once destroyed the controller is not called and `metrics` comes back
    /// unchanged.
    #[must_use]
    pub fn adjust_scroll_for_surface_shift(
        &self,
        metrics: ViewportMetrics,
        shift: Vec2,
    ) -> ViewportMetrics {
        if self.is_destroyed() {
            return metrics;
        }
        if let Some(engine) = self.engine.lock().as_mut() {
            engine.adjust_scroll_for_surface_shift(shift);
        }
        metrics.offset_viewport_by_and_clamp(shift)
    }

    /// Invalidates the bridge and releases the controller handle.
    ///
    /// Idempotent and safe from any thread; the first call wins and drops the
    /// boxed engine exactly once. Deferred relay callbacks already queued are
    /// not cancelled.
    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        log::debug!("pan-zoom bridge destroyed");
        drop(self.engine.lock().take());
    }
}

impl core::fmt::Debug for PanZoomBridge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanZoomBridge")
            .field("destroyed", &self.is_destroyed())
            .field("pointer_scroll_factor", &self.pointer_scroll_factor)
            .finish()
    }
}
