// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Immutable snapshot of a view's placement over its scrollable page.
///
/// `ViewportMetrics` records three things, all in screen pixels except the
/// zoom factor:
///
/// - `viewport`: where the visible window currently sits over the page.
/// - `page`: the scrollable content bounds.
/// - `zoom`: the uniform scale from layer (logical content) pixels to screen
///   pixels; must be positive.
///
/// Values are snapshots: every operation returns a new `ViewportMetrics`
/// rather than mutating in place, so a metrics value handed across a thread
/// boundary stays coherent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    viewport: Rect,
    page: Rect,
    zoom: f64,
}

impl ViewportMetrics {
    /// Creates metrics from a viewport rect, page rect, and zoom factor.
    ///
    /// `zoom` must be positive; this is checked only in debug builds.
    #[must_use]
    pub fn new(viewport: Rect, page: Rect, zoom: f64) -> Self {
        debug_assert!(zoom > 0.0);
        Self {
            viewport,
            page,
            zoom,
        }
    }

    /// Returns the viewport rect in screen pixels.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns the page (scrollable content) rect in screen pixels.
    #[must_use]
    pub fn page(&self) -> Rect {
        self.page
    }

    /// Returns the zoom factor (layer pixels × zoom = screen pixels).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the viewport origin (its top-left corner).
    #[must_use]
    pub fn origin(&self) -> Point {
        self.viewport.origin()
    }

    /// Converts a view-space point to a layer-space point.
    ///
    /// The point is offset by the viewport origin and divided by the zoom
    /// factor, so the result is in logical content pixels.
    #[must_use]
    pub fn view_to_layer_point(&self, p: Point) -> Point {
        let origin = self.viewport.origin();
        Point::new((p.x + origin.x) / self.zoom, (p.y + origin.y) / self.zoom)
    }

    /// Converts a layer-space point back to view space.
    ///
    /// Inverse of [`view_to_layer_point`](Self::view_to_layer_point).
    #[must_use]
    pub fn layer_to_view_point(&self, p: Point) -> Point {
        let origin = self.viewport.origin();
        Point::new(p.x * self.zoom - origin.x, p.y * self.zoom - origin.y)
    }

    /// Returns a copy whose viewport is shifted by `shift` and clamped to the
    /// page bounds.
    ///
    /// Per axis, the new origin is kept within `[page.min, page.max − size]`.
    /// When the page is smaller than the viewport on an axis, the origin is
    /// pinned to `page.min` on that axis. Viewport size, page, and zoom are
    /// unchanged.
    #[must_use]
    pub fn offset_viewport_by_and_clamp(&self, shift: Vec2) -> Self {
        let size = self.viewport.size();
        let x = clamp_axis(
            self.viewport.x0 + shift.x,
            self.page.x0,
            self.page.x1 - size.width,
        );
        let y = clamp_axis(
            self.viewport.y0 + shift.y,
            self.page.y0,
            self.page.y1 - size.height,
        );
        Self {
            viewport: Rect::new(x, y, x + size.width, y + size.height),
            page: self.page,
            zoom: self.zoom,
        }
    }
}

/// Clamp `value` to `[min, max]`, pinning to `min` when the range is inverted
/// (page smaller than viewport on this axis).
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}
