// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Line, Point, Rect};
use peniko::Color;

/// Horizontal anchoring of text relative to its origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Origin is the left edge of the text.
    #[default]
    Start,
    /// Origin is the horizontal center of the text.
    Center,
    /// Origin is the right edge of the text.
    End,
}

/// Operations that modify the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform from CSS pixels to device pixels.
    SetTransform(Affine),
    /// Set the color used by [`DrawOp::FillRect`] and [`DrawOp::FillText`].
    SetFill(Color),
    /// Set the color and width used by [`DrawOp::StrokeLine`].
    SetStroke {
        /// Stroke color.
        color: Color,
        /// Stroke width in CSS pixels.
        width: f64,
    },
    /// Set the font used by [`DrawOp::FillText`].
    SetFont {
        /// Font size in CSS pixels.
        size: f64,
        /// CSS font family.
        family: String,
    },
    /// Set the horizontal text anchoring.
    SetTextAlign(TextAlign),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Reset a rectangle to transparent.
    Clear(Rect),
    /// Fill a rectangle with the current fill color.
    FillRect(Rect),
    /// Stroke a line segment with the current stroke.
    StrokeLine(Line),
    /// Draw text with its baseline at `origin.y`, anchored per the current
    /// alignment.
    FillText {
        /// Text to draw.
        text: String,
        /// Anchor point.
        origin: Point,
    },
}

/// A state or draw operation, in application order.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// State operation.
    State(StateOp),
    /// Draw operation.
    Draw(DrawOp),
}

/// A target for ruler drawing.
///
/// Backends interpret a stream of [`StateOp`]s and [`DrawOp`]s. State is
/// sticky: a draw uses whatever state was last set.
pub trait RulerSurface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Apply either kind of operation.
    #[inline]
    fn apply(&mut self, op: SurfaceOp) {
        match op {
            SurfaceOp::State(op) => self.state(op),
            SurfaceOp::Draw(op) => self.draw(op),
        }
    }
}

impl<S: RulerSurface + ?Sized> RulerSurface for &mut S {
    fn state(&mut self, op: StateOp) {
        (**self).state(op);
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}
