// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-event facade: the input vocabulary the embedder fills in.
//!
//! The bridge does not talk to any windowing toolkit directly. The embedder
//! translates its platform's motion events into [`MotionEvent`] values and
//! feeds them to the bridge, which extracts the per-pointer data the
//! controller consumes.

use smallvec::SmallVec;

/// The masked action of a motion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAction {
    /// A primary pointer went down, starting a new gesture.
    Down,
    /// The last pointer went up, ending the gesture.
    Up,
    /// One or more pointers moved.
    Move,
    /// The gesture was aborted by the platform.
    Cancel,
    /// A secondary pointer went down mid-gesture.
    PointerDown,
    /// A secondary pointer went up mid-gesture.
    PointerUp,
    /// A scroll-wheel or trackpad scroll tick.
    Scroll,
}

bitflags::bitflags! {
    /// Modifier-key state attached to a motion event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct MetaState: u32 {
        /// A shift key is held.
        const SHIFT = 1 << 0;
        /// An alt key is held.
        const ALT = 1 << 1;
        /// A control key is held.
        const CTRL = 1 << 12;
        /// A meta/command key is held.
        const META = 1 << 16;
    }
}

/// Raw per-pointer data carried by a [`MotionEvent`].
///
/// Coordinates are in view space (screen pixels relative to the view origin);
/// `tool_major`/`tool_minor` are the touching tool's contact ellipse radii in
/// the same units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerCoords {
    /// Stable pointer id, constant for a pointer's lifetime within a gesture.
    pub id: i32,
    /// X position in view space.
    pub x: f64,
    /// Y position in view space.
    pub y: f64,
    /// Tool orientation in radians.
    pub orientation: f64,
    /// Normalized pressure.
    pub pressure: f64,
    /// Major radius of the contact ellipse.
    pub tool_major: f64,
    /// Minor radius of the contact ellipse.
    pub tool_minor: f64,
}

impl PointerCoords {
    /// A pointer at `(x, y)` with zero orientation/pressure/radii.
    #[must_use]
    pub fn at(id: i32, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            orientation: 0.0,
            pressure: 0.0,
            tool_major: 0.0,
            tool_minor: 0.0,
        }
    }
}

/// A platform motion event as presented to the bridge.
///
/// `down_time` is the timestamp of the touch-down that started the current
/// gesture; the bridge uses it as the gesture epoch (see
/// [`PanZoomBridge::handle_motion_event`](crate::PanZoomBridge::handle_motion_event)).
/// For [`MotionAction::Scroll`] events, `h_scroll`/`v_scroll` carry the raw
/// axis values and `pointers` holds the cursor position.
#[derive(Clone, Debug)]
pub struct MotionEvent {
    /// The masked action.
    pub action: MotionAction,
    /// Index of the pointer that triggered a pointer-down/up action.
    pub action_index: usize,
    /// Timestamp (ms) of the gesture's initiating down event.
    pub down_time: u64,
    /// Timestamp (ms) of this event.
    pub event_time: u64,
    /// Modifier-key state.
    pub meta_state: MetaState,
    /// Per-pointer data, in the platform's pointer index order.
    pub pointers: SmallVec<[PointerCoords; 4]>,
    /// Raw horizontal scroll axis value (scroll events only).
    pub h_scroll: f64,
    /// Raw vertical scroll axis value (scroll events only).
    pub v_scroll: f64,
}

impl MotionEvent {
    /// Creates an event with no pointers and no scroll deltas.
    #[must_use]
    pub fn new(action: MotionAction, down_time: u64, event_time: u64) -> Self {
        Self {
            action,
            action_index: 0,
            down_time,
            event_time,
            meta_state: MetaState::empty(),
            pointers: SmallVec::new(),
            h_scroll: 0.0,
            v_scroll: 0.0,
        }
    }

    /// Returns the event with `pointer` appended.
    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerCoords) -> Self {
        self.pointers.push(pointer);
        self
    }

    /// Returns the event with the given scroll axis values.
    #[must_use]
    pub fn with_scroll(mut self, h_scroll: f64, v_scroll: f64) -> Self {
        self.h_scroll = h_scroll;
        self.v_scroll = v_scroll;
        self
    }

    /// Returns the event with the given modifier state.
    #[must_use]
    pub fn with_meta_state(mut self, meta_state: MetaState) -> Self {
        self.meta_state = meta_state;
        self
    }

    /// Number of pointers on this event.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// Which coordinate space extracted pointer data should be reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// Pass coordinates and radii through unchanged (view space).
    View,
    /// Map coordinates through the view→layer transform and descale radii by
    /// the zoom factor.
    Layer,
}
