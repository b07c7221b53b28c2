// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler Render: drawing the ruler into a backend-agnostic surface.
//!
//! - [`RulerSurface`] is the backend seam. It receives sticky [`StateOp`]s
//!   (transform, fill, stroke, font, text alignment) and [`DrawOp`]s (clear,
//!   rectangle, line, text).
//! - [`RulerRenderer`] turns a [`GenomicRange`](genoruler_locus::GenomicRange)
//!   and its [`TickLayout`](genoruler_view::TickLayout) into those ops using a
//!   [`RulerStyle`].
//! - [`FrameLimiter`] throttles redraws per ruler with caller-supplied
//!   timestamps.
//!
//! Backends live in sibling crates: `genoruler_render_ref` records ops with
//! state snapshots for tests, and `genoruler_render_svg` exports SVG.
//!
//! ## Minimal example
//!
//! ```rust
//! use genoruler_locus::GenomicRange;
//! use genoruler_render::{DrawOp, RulerRenderer, RulerSurface, StateOp};
//! use genoruler_view::{TickLadder, tick_layout};
//! use kurbo::Size;
//!
//! #[derive(Default)]
//! struct Labels(Vec<String>);
//!
//! impl RulerSurface for Labels {
//!     fn state(&mut self, _: StateOp) {}
//!     fn draw(&mut self, op: DrawOp) {
//!         if let DrawOp::FillText { text, .. } = op {
//!             self.0.push(text);
//!         }
//!     }
//! }
//!
//! let range = GenomicRange::new(30_000_000.0, 40_000_000.0);
//! let layout = tick_layout(range, 800.0, TickLadder::PowerOfTen).unwrap();
//! let mut labels = Labels::default();
//! RulerRenderer::default().draw(&mut labels, range, &layout, Size::new(800.0, 60.0), 1.0);
//! assert_eq!(labels.0.first().map(String::as_str), Some("30 mb"));
//! ```

mod frame;
mod ir;
mod renderer;
mod style;

pub use frame::{DEFAULT_MIN_FRAME_INTERVAL, FrameLimiter};
pub use ir::{DrawOp, RulerSurface, StateOp, SurfaceOp, TextAlign};
pub use renderer::{FrameStats, RulerRenderer};
pub use style::RulerStyle;
