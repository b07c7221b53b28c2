// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel interpretation for a horizontal ruler.
//!
//! [`RulerInteraction`] is a two-state machine:
//!
//! - `Idle → Dragging` on [`PointerInput::Down`].
//! - `Dragging → Dragging` on [`PointerInput::Move`], yielding
//!   [`RulerGesture::Pan`] with the X delta since the previous position.
//! - `Dragging → Idle` on [`PointerInput::Up`] or [`PointerInput::Leave`].
//!
//! Wheel input is independent of the state and always yields
//! [`RulerGesture::Zoom`]. The machine never touches a viewport; callers map
//! gestures onto their own operations.
//!
//! ## Minimal example
//!
//! ```
//! use genoruler_event_state::interaction::{PointerInput, RulerGesture, RulerInteraction};
//! use cursor_icon::CursorIcon;
//! use kurbo::Point;
//!
//! let mut ruler = RulerInteraction::new();
//! assert_eq!(ruler.cursor(), CursorIcon::Grab);
//!
//! assert_eq!(ruler.pointer(PointerInput::Down { pos: Point::new(200.0, 5.0) }), None);
//! assert_eq!(ruler.cursor(), CursorIcon::Grabbing);
//! assert_eq!(
//!     ruler.pointer(PointerInput::Move { pos: Point::new(240.0, 9.0) }),
//!     Some(RulerGesture::Pan { delta_x: 40.0 })
//! );
//!
//! assert_eq!(ruler.wheel(240.0, -120.0), Some(RulerGesture::Zoom { x: 240.0, sign: -1.0 }));
//! ```

use cursor_icon::CursorIcon;
use kurbo::Point;

use crate::drag::DragState;

/// Pointer input in surface CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Primary button pressed at `pos`.
    Down {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer moved to `pos`.
    Move {
        /// Pointer position.
        pos: Point,
    },
    /// Primary button released.
    Up,
    /// Pointer left the surface.
    Leave,
}

/// A viewport operation requested by user input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RulerGesture {
    /// Pan by `delta_x` pixels; positive means the content was dragged right.
    Pan {
        /// Horizontal movement since the previous pointer position.
        delta_x: f64,
    },
    /// Zoom one step about pixel offset `x`.
    ///
    /// `sign` is `1.0` to zoom out and `-1.0` to zoom in.
    Zoom {
        /// Horizontal pixel offset of the cursor.
        x: f64,
        /// Sign of the wheel's vertical delta.
        sign: f64,
    },
}

/// Current phase of a [`RulerInteraction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// No button held.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// The ruler's pointer state machine.
#[derive(Clone, Debug, Default)]
pub struct RulerInteraction {
    drag: DragState,
}

impl RulerInteraction {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        if self.drag.is_dragging() {
            InteractionPhase::Dragging
        } else {
            InteractionPhase::Idle
        }
    }

    /// Feeds one pointer event, returning a pan gesture for moves while
    /// dragging.
    ///
    /// Zero-length moves yield nothing.
    pub fn pointer(&mut self, input: PointerInput) -> Option<RulerGesture> {
        match input {
            PointerInput::Down { pos } => {
                self.drag.start(pos);
                None
            }
            PointerInput::Move { pos } => {
                let delta = self.drag.update(pos)?;
                (delta.x != 0.0).then_some(RulerGesture::Pan { delta_x: delta.x })
            }
            PointerInput::Up | PointerInput::Leave => {
                self.drag.end();
                None
            }
        }
    }

    /// Feeds one wheel event at pixel offset `x` with vertical delta `delta_y`.
    ///
    /// Only the sign of `delta_y` matters; zero or NaN yields nothing.
    pub fn wheel(&self, x: f64, delta_y: f64) -> Option<RulerGesture> {
        let sign = if delta_y > 0.0 {
            1.0
        } else if delta_y < 0.0 {
            -1.0
        } else {
            return None;
        };
        Some(RulerGesture::Zoom { x, sign })
    }

    /// Cursor to show over the ruler.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        match self.phase() {
            InteractionPhase::Idle => CursorIcon::Grab,
            InteractionPhase::Dragging => CursorIcon::Grabbing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64) -> PointerInput {
        PointerInput::Down {
            pos: Point::new(x, 10.0),
        }
    }

    fn moved(x: f64) -> PointerInput {
        PointerInput::Move {
            pos: Point::new(x, 10.0),
        }
    }

    #[test]
    fn move_while_idle_yields_nothing() {
        let mut m = RulerInteraction::new();
        assert_eq!(m.pointer(moved(50.0)), None);
        assert_eq!(m.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn drag_yields_incremental_pans() {
        let mut m = RulerInteraction::new();
        assert_eq!(m.pointer(down(100.0)), None);
        assert_eq!(m.phase(), InteractionPhase::Dragging);
        assert_eq!(
            m.pointer(moved(110.0)),
            Some(RulerGesture::Pan { delta_x: 10.0 })
        );
        assert_eq!(
            m.pointer(moved(105.0)),
            Some(RulerGesture::Pan { delta_x: -5.0 })
        );
        // Vertical-only movement does not pan.
        assert_eq!(
            m.pointer(PointerInput::Move {
                pos: Point::new(105.0, 40.0)
            }),
            None
        );
    }

    #[test]
    fn up_and_leave_end_the_drag() {
        for end in [PointerInput::Up, PointerInput::Leave] {
            let mut m = RulerInteraction::new();
            m.pointer(down(0.0));
            assert_eq!(m.cursor(), CursorIcon::Grabbing);
            assert_eq!(m.pointer(end), None);
            assert_eq!(m.phase(), InteractionPhase::Idle);
            assert_eq!(m.cursor(), CursorIcon::Grab);
            assert_eq!(m.pointer(moved(30.0)), None);
        }
    }

    #[test]
    fn wheel_uses_only_the_sign() {
        let m = RulerInteraction::new();
        assert_eq!(
            m.wheel(12.0, 3.0),
            Some(RulerGesture::Zoom { x: 12.0, sign: 1.0 })
        );
        assert_eq!(
            m.wheel(12.0, -250.0),
            Some(RulerGesture::Zoom {
                x: 12.0,
                sign: -1.0
            })
        );
        assert_eq!(m.wheel(12.0, 0.0), None);
        assert_eq!(m.wheel(12.0, f64::NAN), None);
    }

    #[test]
    fn wheel_is_allowed_while_dragging() {
        let mut m = RulerInteraction::new();
        m.pointer(down(10.0));
        assert!(m.wheel(10.0, 1.0).is_some());
        assert_eq!(m.phase(), InteractionPhase::Dragging);
        assert_eq!(
            m.pointer(moved(20.0)),
            Some(RulerGesture::Pan { delta_x: 10.0 })
        );
    }
}
