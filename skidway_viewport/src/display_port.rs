// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// A repaint request: the content region the controller wants rendered.
///
/// The controller reports the region as an origin plus a size together with
/// the resolution it should be rendered at; the bridge carries it to the view
/// as a rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPort {
    /// Requested content region, in layer pixels.
    pub rect: Rect,
    /// Resolution the region should be rendered at.
    pub resolution: f64,
}

impl DisplayPort {
    /// Builds a display port from an origin, a size, and a resolution.
    ///
    /// The rect spans `(x, y)` to `(x + width, y + height)`.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64, resolution: f64) -> Self {
        Self {
            rect: Rect::new(x, y, x + width, y + height),
            resolution,
        }
    }
}
