// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skidway Viewport: the geometry vocabulary of the pan-zoom bridge.
//!
//! This crate provides the two value types the bridge exchanges with its host
//! view and with the external pan-zoom controller:
//!
//! - [`ViewportMetrics`]: an immutable snapshot of the view's placement over
//!   the scrollable page — viewport rect, page rect, and zoom factor — with
//!   view↔layer point conversion and the offset-and-clamp operation used when
//!   the rendering surface shifts under the view.
//! - [`DisplayPort`]: the rectangular region of content (plus resolution) that
//!   the controller asks the view to repaint.
//!
//! ## Coordinate spaces
//!
//! *View* coordinates are screen pixels relative to the view's top-left
//! corner. *Layer* coordinates are logical content pixels: a view point is
//! offset by the viewport origin and divided by the zoom factor.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use skidway_viewport::ViewportMetrics;
//!
//! let metrics = ViewportMetrics::new(
//!     Rect::new(100.0, 50.0, 500.0, 450.0),
//!     Rect::new(0.0, 0.0, 2000.0, 2000.0),
//!     2.0,
//! );
//!
//! let layer = metrics.view_to_layer_point(Point::new(20.0, 30.0));
//! assert_eq!(layer, Point::new(60.0, 40.0));
//! assert_eq!(metrics.layer_to_view_point(layer), Point::new(20.0, 30.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod display_port;
mod metrics;

pub use display_port::DisplayPort;
pub use metrics::ViewportMetrics;
