// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler: an interactive genomic ruler.
//!
//! This crate wires the lower layers into user-facing components:
//! - [`Ruler`]: a [`ViewportEngine`](genoruler_view::ViewportEngine), the
//!   pointer/wheel gesture machine, the renderer, a per-ruler frame limiter
//!   and a drawing surface. It redraws in response to the engine's change
//!   notification.
//! - [`LocusInputWidget`]: a headless locus text field that parses and
//!   submits loci and shows inline validation messages.
//! - [`config::RulerConfig`]: TOML configuration.
//!
//! The `genoruler` binary renders a ruler to SVG after an optional scripted
//! sequence of wheel and drag gestures.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use genoruler::{LocusInputWidget, Ruler};
//! use genoruler_event_state::interaction::PointerInput;
//! use genoruler_locus::ChromosomeTable;
//! use genoruler_render_svg::SvgSurface;
//! use genoruler_view::ViewportEngine;
//! use kurbo::{Point, Size};
//!
//! let engine = ViewportEngine::new(ChromosomeTable::grch38());
//! let mut ruler = Ruler::new(engine, SvgSurface::new(), Size::new(800.0, 60.0));
//!
//! let input = LocusInputWidget::new();
//! input.connect(ruler.engine_mut());
//! input.set_text("chr7:30,000,000-40,000,000");
//! ruler.submit(&input, Duration::ZERO).unwrap();
//!
//! // Drag 80 px to the right: 1 Mb further left.
//! let t = Duration::from_millis(100);
//! ruler.pointer(PointerInput::Down { pos: Point::new(100.0, 10.0) }, t);
//! ruler.pointer(PointerInput::Move { pos: Point::new(180.0, 10.0) }, t);
//! ruler.pointer(PointerInput::Up, t);
//! assert_eq!(input.text(), "chr7:29,000,000-39,000,000");
//!
//! let svg = ruler.surface().to_svg(800, 60);
//! assert!(svg.contains(">29 mb</text>"));
//! ```

pub mod config;
mod locus_input;
mod ruler;

pub use locus_input::{LocusInputError, LocusInputWidget};
pub use ruler::Ruler;
