// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas and total offsets from pointer positions.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the pointer-down position.
//! 2) On each move, [`DragState::update`] returns the delta since the previous
//!    position and makes the new position the anchor.
//! 3) [`DragState::total_offset`] gives the offset from the start position.
//! 4) [`DragState::end`] resets the state.
//!
//! ## Minimal example
//!
//! ```
//! use genoruler_event_state::drag::DragState;
//! use kurbo::Point;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 12.0));
//!
//! let delta = drag.update(Point::new(130.0, 14.0)).unwrap();
//! assert_eq!(delta.x, 30.0);
//!
//! let delta = drag.update(Point::new(125.0, 14.0)).unwrap();
//! assert_eq!(delta.x, -5.0);
//!
//! assert_eq!(drag.total_offset(Point::new(125.0, 14.0)).unwrap().x, 25.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the anchor of an in-progress drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Pointer-down position of the current drag.
    pub start_pos: Option<Point>,
    /// Last position reported to [`DragState::update`].
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Starts a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Returns the movement since the last position and re-anchors at `pos`.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `current_pos` from the drag start.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the current drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
