// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extraction of controller-ready primitive data from platform events.
//!
//! The controller boundary speaks parallel per-pointer arrays, not event
//! objects. [`MotionBatch::from_event`] flattens a [`MotionEvent`] into those
//! arrays, optionally remapping into layer space; [`ScrollSample`] is the
//! analogous single-row payload for scroll events. Both builders are pure —
//! gesture gating and the destroyed check live on
//! [`PanZoomBridge`](crate::PanZoomBridge).

use kurbo::Point;
use skidway_viewport::ViewportMetrics;
use smallvec::SmallVec;

use crate::event::{CoordinateSpace, MetaState, MotionAction, MotionEvent};

/// One extracted pointer, the row view over a [`MotionBatch`]'s arrays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Stable pointer id.
    pub id: i32,
    /// X position, in the batch's coordinate space.
    pub x: f64,
    /// Y position, in the batch's coordinate space.
    pub y: f64,
    /// Tool orientation in radians.
    pub orientation: f64,
    /// Normalized pressure.
    pub pressure: f64,
    /// Major contact radius, descaled by zoom in layer space.
    pub tool_major: f64,
    /// Minor contact radius, descaled by zoom in layer space.
    pub tool_minor: f64,
}

/// A motion event flattened into parallel per-pointer arrays.
///
/// All arrays have the same length, equal to the source event's pointer
/// count, in the source event's pointer index order. Rows are appended and
/// read only as whole [`PointerSample`]s, so the equal-length invariant holds
/// by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionBatch {
    /// The masked action of the source event.
    pub action: MotionAction,
    /// Index of the pointer that triggered a pointer-down/up action.
    pub action_index: usize,
    /// Timestamp (ms) of the source event.
    pub event_time: u64,
    /// Modifier-key state of the source event.
    pub meta_state: MetaState,
    ids: SmallVec<[i32; 4]>,
    xs: SmallVec<[f64; 4]>,
    ys: SmallVec<[f64; 4]>,
    orientations: SmallVec<[f64; 4]>,
    pressures: SmallVec<[f64; 4]>,
    tool_majors: SmallVec<[f64; 4]>,
    tool_minors: SmallVec<[f64; 4]>,
}

impl MotionBatch {
    /// Flattens `event` into per-pointer arrays in the requested space.
    ///
    /// In [`CoordinateSpace::View`], coordinates and radii pass through
    /// unchanged. In [`CoordinateSpace::Layer`], each position is mapped
    /// through `metrics`' view→layer transform and the tool radii are divided
    /// by the zoom factor so reported contact size is resolution-independent.
    /// Orientation and pressure pass through in both spaces.
    #[must_use]
    pub fn from_event(
        event: &MotionEvent,
        metrics: &ViewportMetrics,
        space: CoordinateSpace,
    ) -> Self {
        let zoom = match space {
            CoordinateSpace::View => 1.0,
            CoordinateSpace::Layer => metrics.zoom(),
        };
        let mut batch = Self {
            action: event.action,
            action_index: event.action_index,
            event_time: event.event_time,
            meta_state: event.meta_state,
            ids: SmallVec::new(),
            xs: SmallVec::new(),
            ys: SmallVec::new(),
            orientations: SmallVec::new(),
            pressures: SmallVec::new(),
            tool_majors: SmallVec::new(),
            tool_minors: SmallVec::new(),
        };
        for coords in &event.pointers {
            let position = match space {
                CoordinateSpace::View => Point::new(coords.x, coords.y),
                CoordinateSpace::Layer => {
                    metrics.view_to_layer_point(Point::new(coords.x, coords.y))
                }
            };
            batch.push_sample(PointerSample {
                id: coords.id,
                x: position.x,
                y: position.y,
                orientation: coords.orientation,
                pressure: coords.pressure,
                tool_major: coords.tool_major / zoom,
                tool_minor: coords.tool_minor / zoom,
            });
        }
        batch
    }

    fn push_sample(&mut self, sample: PointerSample) {
        self.ids.push(sample.id);
        self.xs.push(sample.x);
        self.ys.push(sample.y);
        self.orientations.push(sample.orientation);
        self.pressures.push(sample.pressure);
        self.tool_majors.push(sample.tool_major);
        self.tool_minors.push(sample.tool_minor);
    }

    /// Number of pointers in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the batch carries no pointers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the sample at pointer index `i`, if in range.
    #[must_use]
    pub fn sample(&self, i: usize) -> Option<PointerSample> {
        if i >= self.len() {
            return None;
        }
        Some(PointerSample {
            id: self.ids[i],
            x: self.xs[i],
            y: self.ys[i],
            orientation: self.orientations[i],
            pressure: self.pressures[i],
            tool_major: self.tool_majors[i],
            tool_minor: self.tool_minors[i],
        })
    }

    /// The pointer id array.
    #[must_use]
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// The x position array.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y position array.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The orientation array.
    #[must_use]
    pub fn orientations(&self) -> &[f64] {
        &self.orientations
    }

    /// The pressure array.
    #[must_use]
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// The tool major-radius array.
    #[must_use]
    pub fn tool_majors(&self) -> &[f64] {
        &self.tool_majors
    }

    /// The tool minor-radius array.
    #[must_use]
    pub fn tool_minors(&self) -> &[f64] {
        &self.tool_minors
    }
}

/// A scroll event reduced to the fields the controller consumes.
///
/// `x`/`y` are the first pointer's position in view space; the deltas have
/// already been sign-flipped per the wheel preference and scaled by the
/// pointer-scroll factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Cursor x position in view space.
    pub x: f64,
    /// Cursor y position in view space.
    pub y: f64,
    /// Horizontal scroll delta, flipped and scaled.
    pub h_scroll: f64,
    /// Vertical scroll delta, flipped and scaled.
    pub v_scroll: f64,
    /// Timestamp (ms) of the source event.
    pub event_time: u64,
    /// Modifier-key state of the source event.
    pub meta_state: MetaState,
}

impl ScrollSample {
    /// Reduces `event` to a scroll sample, or `None` if it has no pointers.
    ///
    /// The axis values are multiplied by `flip` (±1.0, from the
    /// negate-wheel-scroll preference) and by `scroll_factor` (pixels per
    /// scroll unit, see [`HostMetrics`](crate::HostMetrics)).
    #[must_use]
    pub fn from_event(event: &MotionEvent, flip: f64, scroll_factor: f64) -> Option<Self> {
        let first = event.pointers.first()?;
        Some(Self {
            x: first.x,
            y: first.y,
            h_scroll: event.h_scroll * flip * scroll_factor,
            v_scroll: event.v_scroll * flip * scroll_factor,
            event_time: event.event_time,
            meta_state: event.meta_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{MetaState, PointerCoords};
    use kurbo::Rect;

    fn metrics() -> ViewportMetrics {
        ViewportMetrics::new(
            Rect::new(100.0, 50.0, 500.0, 450.0),
            Rect::new(0.0, 0.0, 4000.0, 4000.0),
            2.0,
        )
    }

    fn two_pointer_move() -> MotionEvent {
        MotionEvent::new(MotionAction::Move, 10, 42)
            .with_pointer(PointerCoords {
                id: 7,
                x: 20.0,
                y: 30.0,
                orientation: 0.5,
                pressure: 0.8,
                tool_major: 12.0,
                tool_minor: 6.0,
            })
            .with_pointer(PointerCoords {
                id: 9,
                x: 40.0,
                y: 70.0,
                orientation: -0.25,
                pressure: 0.4,
                tool_major: 8.0,
                tool_minor: 4.0,
            })
    }

    #[test]
    fn batch_arrays_match_pointer_count() {
        let event = two_pointer_move();
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::View);
        assert_eq!(batch.len(), 2);
        for arr_len in [
            batch.ids().len(),
            batch.xs().len(),
            batch.ys().len(),
            batch.orientations().len(),
            batch.pressures().len(),
            batch.tool_majors().len(),
            batch.tool_minors().len(),
        ] {
            assert_eq!(arr_len, 2);
        }
        assert_eq!(batch.ids(), &[7, 9]);
        assert_eq!(batch.event_time, 42);
    }

    #[test]
    fn view_space_passes_through_unchanged() {
        let event = two_pointer_move();
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::View);
        let s = batch.sample(0).unwrap();
        assert_eq!((s.x, s.y), (20.0, 30.0));
        assert_eq!((s.tool_major, s.tool_minor), (12.0, 6.0));
    }

    #[test]
    fn layer_space_remaps_and_descales_radii() {
        let event = two_pointer_move();
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::Layer);
        let s = batch.sample(0).unwrap();
        // (20 + 100) / 2, (30 + 50) / 2
        assert_eq!((s.x, s.y), (60.0, 40.0));
        // Radii are descaled by zoom 2.0; a view-space batch reports 2× these.
        assert_eq!((s.tool_major, s.tool_minor), (6.0, 3.0));
        // Orientation and pressure pass through in both spaces.
        assert_eq!(s.orientation, 0.5);
        assert_eq!(s.pressure, 0.8);
    }

    #[test]
    fn sample_out_of_range_is_none() {
        let event = two_pointer_move();
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::View);
        assert!(batch.sample(2).is_none());
    }

    #[test]
    fn empty_event_yields_empty_batch() {
        let event = MotionEvent::new(MotionAction::Cancel, 10, 11);
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::Layer);
        assert!(batch.is_empty());
    }

    #[test]
    fn scroll_sample_flips_and_scales() {
        let event = MotionEvent::new(MotionAction::Scroll, 10, 99)
            .with_pointer(PointerCoords::at(0, 5.0, 6.0))
            .with_scroll(2.0, -3.0);
        let sample = ScrollSample::from_event(&event, -1.0, 48.0).unwrap();
        assert_eq!((sample.x, sample.y), (5.0, 6.0));
        assert_eq!(sample.h_scroll, -96.0);
        assert_eq!(sample.v_scroll, 144.0);
    }

    #[test]
    fn meta_state_rides_through_batch_and_scroll_sample() {
        let meta = MetaState::SHIFT | MetaState::CTRL;
        let event = two_pointer_move().with_meta_state(meta);
        let batch = MotionBatch::from_event(&event, &metrics(), CoordinateSpace::Layer);
        assert_eq!(batch.meta_state, meta);

        let scroll = MotionEvent::new(MotionAction::Scroll, 10, 99)
            .with_pointer(PointerCoords::at(0, 1.0, 2.0))
            .with_scroll(1.0, -1.0)
            .with_meta_state(meta);
        let sample = ScrollSample::from_event(&scroll, 1.0, 48.0).unwrap();
        assert_eq!(sample.meta_state, meta);
    }

    #[test]
    fn scroll_sample_requires_a_pointer() {
        let event = MotionEvent::new(MotionAction::Scroll, 10, 99).with_scroll(2.0, -3.0);
        assert!(ScrollSample::from_event(&event, 1.0, 48.0).is_none());
    }
}
