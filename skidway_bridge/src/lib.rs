// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skidway Bridge: platform input marshalled to an external pan-zoom
//! controller.
//!
//! This crate is the glue between a host view's input stream and an
//! asynchronous pan-zoom controller that lives elsewhere. The bridge owns no
//! pan-zoom behavior of its own — no fling physics, no gesture recognition,
//! no overscroll math. It does four things:
//!
//! - **Extracts**: flattens platform [`MotionEvent`]s into the parallel
//!   per-pointer arrays ([`MotionBatch`]) and reduced scroll payloads
//!   ([`ScrollSample`]) the controller consumes, optionally remapping into
//!   layer space ([`extract`]).
//! - **Dispatches**: forwards extracted data across the [`PanZoomEngine`]
//!   seam, gated on the gesture epoch and on the bridge's destroyed flag
//!   ([`PanZoomBridge`]).
//! - **Relays**: carries controller callbacks — overscroll velocity/offset,
//!   toolbar pinning, repaint requests — back to the view layer, deferring
//!   onto the UI thread where required ([`CallbackRelay`], [`UiTaskQueue`]).
//! - **Observes**: watches the negate-wheel-scroll preference and applies it
//!   to scroll-axis signs ([`PrefRegistry`]).
//!
//! All failure modes degrade to a boolean "not handled" or a silent no-op;
//! nothing here panics or returns an error.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use kurbo::{Rect, Vec2};
//! use skidway_bridge::{
//!     HostMetrics, MotionAction, MotionBatch, MotionEvent, PanZoomBridge, PanZoomEngine,
//!     PanZoomView, PinReason, PointerCoords, PrefRegistry, ScrollSample, UiTaskQueue,
//! };
//! use skidway_viewport::{DisplayPort, ViewportMetrics};
//!
//! struct View;
//! impl PanZoomView for View {
//!     fn viewport_metrics(&self) -> ViewportMetrics {
//!         ViewportMetrics::new(
//!             Rect::new(0.0, 0.0, 800.0, 600.0),
//!             Rect::new(0.0, 0.0, 4000.0, 4000.0),
//!             1.0,
//!         )
//!     }
//!     fn force_redraw(&self, _port: DisplayPort) {}
//!     fn set_toolbar_pinned(&self, _pinned: bool, _reason: PinReason) {}
//! }
//!
//! struct Engine;
//! impl PanZoomEngine for Engine {
//!     fn handle_motion_batch(&mut self, _batch: &MotionBatch) -> bool { true }
//!     fn handle_scroll(&mut self, _sample: &ScrollSample) -> bool { true }
//!     fn abort_animation(&mut self) {}
//!     fn set_longpress_enabled(&mut self, _enabled: bool) {}
//!     fn adjust_scroll_for_surface_shift(&mut self, _shift: Vec2) {}
//! }
//!
//! let prefs = PrefRegistry::new();
//! let bridge = PanZoomBridge::new(
//!     Arc::new(View),
//!     Box::new(Engine),
//!     HostMetrics { list_item_height: Some(48.0), dpi: 160.0 },
//!     &prefs,
//!     Arc::new(UiTaskQueue::new()),
//! );
//!
//! // A touch-down opens a gesture; the engine consumed it.
//! let event = MotionEvent::new(MotionAction::Down, 100, 100)
//!     .with_pointer(PointerCoords::at(0, 40.0, 60.0));
//! assert!(bridge.on_touch_event(&event));
//!
//! // A move from a different gesture epoch is rejected.
//! let stale = MotionEvent::new(MotionAction::Move, 90, 110)
//!     .with_pointer(PointerCoords::at(0, 42.0, 61.0));
//! assert!(!bridge.on_touch_event(&stale));
//!
//! // After destroy every entry point is a silent no-op.
//! bridge.destroy();
//! assert!(!bridge.on_touch_event(&event));
//! ```
//!
//! ## Threading
//!
//! Event entry points run on the UI thread. The controller may invoke
//! [`CallbackRelay`] from any thread; overscroll updates arriving off the UI
//! thread are posted to the [`UiTaskQueue`] the bridge was built with, and
//! run when the embedder drains that queue from its event loop.
//! [`PanZoomBridge::destroy`] is safe from any thread.

mod bridge;
mod engine;
mod event;
pub mod extract;
mod prefs;
mod relay;
mod task_queue;

pub use bridge::{HostMetrics, PanZoomBridge};
pub use engine::{Axis, OverscrollHandler, PanZoomEngine, PanZoomView, PinReason};
pub use event::{CoordinateSpace, MetaState, MotionAction, MotionEvent, PointerCoords};
pub use extract::{MotionBatch, PointerSample, ScrollSample};
pub use prefs::{NEGATE_WHEEL_SCROLL_PREF, PrefRegistry};
pub use relay::CallbackRelay;
pub use task_queue::UiTaskQueue;
