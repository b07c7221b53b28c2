// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler recording surface.
//!
//! [`RecordingSurface`] implements [`RulerSurface`] by logging every op
//! together with the drawing state at the time it was applied. It does not
//! rasterize anything; it exists so tests and debugging tools can assert on
//! emitted ops and the state they were drawn with.
//!
//! Events accumulate until [`RecordingSurface::clear_events`]; long-running
//! rulers should draw into a backend that keeps only the current frame.

use genoruler_render::{DrawOp, RulerSurface, StateOp, SurfaceOp, TextAlign};
use kurbo::Affine;
use peniko::Color;

/// Snapshot of the drawing state inside a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current fill color, if set.
    pub fill: Option<Color>,
    /// Current stroke color and width, if set.
    pub stroke: Option<(Color, f64)>,
    /// Current font size and family, if set.
    pub font: Option<(f64, String)>,
    /// Current text alignment.
    pub text_align: TextAlign,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: None,
            stroke: None,
            font: None,
            text_align: TextAlign::default(),
        }
    }
}

/// Event recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// A [`RulerSurface`] that records what it is asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<Event>,
    state: StateSnapshot,
    frames: usize,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in application order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Recorded ops without their snapshots.
    pub fn ops(&self) -> impl Iterator<Item = SurfaceOp> + '_ {
        self.events.iter().map(|e| match e {
            Event::State { op, .. } => SurfaceOp::State(op.clone()),
            Event::Draw { op, .. } => SurfaceOp::Draw(op.clone()),
        })
    }

    /// Draw events with the state each was drawn with.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Text of every [`DrawOp::FillText`], in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.draws().filter_map(|(op, _)| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of frames started, counted by [`DrawOp::Clear`] ops.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Current drawing state.
    #[must_use]
    pub fn state_snapshot(&self) -> &StateSnapshot {
        &self.state
    }

    /// Drops recorded events but keeps the current state and frame count.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl RulerSurface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(xf) => self.state.transform = *xf,
            StateOp::SetFill(color) => self.state.fill = Some(*color),
            StateOp::SetStroke { color, width } => self.state.stroke = Some((*color, *width)),
            StateOp::SetFont { size, family } => self.state.font = Some((*size, family.clone())),
            StateOp::SetTextAlign(align) => self.state.text_align = *align,
        }
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        if matches!(op, DrawOp::Clear(_)) {
            self.frames += 1;
        }
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Line, Point, Rect};

    #[test]
    fn draws_capture_current_state() {
        let mut s = RecordingSurface::new();
        let red = Color::from_rgb8(255, 0, 0);
        s.state(StateOp::SetTransform(Affine::scale(2.0)));
        s.state(StateOp::SetStroke {
            color: red,
            width: 1.0,
        });
        s.draw(DrawOp::StrokeLine(Line::new((1.0, 0.0), (1.0, 10.0))));

        let (op, state) = s.draws().next().expect("one draw");
        assert!(matches!(op, DrawOp::StrokeLine(_)));
        assert_eq!(state.transform, Affine::scale(2.0));
        assert_eq!(state.stroke, Some((red, 1.0)));
        assert_eq!(state.fill, None);
    }

    #[test]
    fn state_events_carry_the_resulting_snapshot() {
        let mut s = RecordingSurface::new();
        s.state(StateOp::SetTextAlign(TextAlign::Center));
        let Event::State { state, .. } = &s.events()[0] else {
            panic!("expected a state event");
        };
        assert_eq!(state.text_align, TextAlign::Center);
    }

    #[test]
    fn clear_counts_frames_and_clear_events_keeps_state() {
        let mut s = RecordingSurface::new();
        s.state(StateOp::SetFill(Color::WHITE));
        s.draw(DrawOp::Clear(Rect::new(0.0, 0.0, 10.0, 10.0)));
        s.draw(DrawOp::FillText {
            text: "1 kb".into(),
            origin: Point::new(5.0, 8.0),
        });
        s.draw(DrawOp::Clear(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(s.frames(), 2);
        assert_eq!(s.texts().collect::<Vec<_>>(), ["1 kb"]);
        assert_eq!(s.ops().count(), 4);

        s.clear_events();
        assert!(s.events().is_empty());
        assert_eq!(s.state_snapshot().fill, Some(Color::WHITE));
        assert_eq!(s.frames(), 2);
    }
}
