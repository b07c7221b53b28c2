// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler View: the genomic viewport engine.
//!
//! This crate provides [`ViewportEngine`], the single owner of the visible
//! [`GenomicRange`](genoruler_locus::GenomicRange) over one chromosome:
//! - Setting a locus with clamping into the chromosome and a minimum span of
//!   [`MIN_SPAN_BP`].
//! - Cursor-anchored wheel zoom ([`ViewportEngine::zoom_at`]) and pixel
//!   panning ([`ViewportEngine::pan_by`]), both clamped to the chromosome.
//! - Pixel/base-pair conversion.
//! - Tick layout ([`TickLayout`]) with `bp`/`kb`/`mb` units and round-number
//!   spacing.
//! - Change notification: every mutation that changes the range calls the
//!   listeners registered with [`ViewportEngine::on_locus_changed`].
//!
//! Rendering, pointer interpretation and text entry live in other crates and
//! talk to the engine only through these operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use genoruler_locus::{ChromosomeTable, GenomicRange};
//! use genoruler_view::ViewportEngine;
//!
//! let mut engine = ViewportEngine::new(ChromosomeTable::grch38());
//! engine.on_locus_changed(|e| println!("now showing {e}"));
//!
//! engine.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
//! assert_eq!(engine.range(), Some(GenomicRange::new(30_000_000.0, 40_000_000.0)));
//!
//! // Drag right by 80 px on an 800 px ruler: reveal 1 Mb to the left.
//! engine.pan_by(80.0, 800.0);
//! assert_eq!(engine.range(), Some(GenomicRange::new(29_000_000.0, 39_000_000.0)));
//!
//! let layout = engine.compute_tick_layout(800.0).unwrap();
//! assert_eq!(layout.unit.name, "mb");
//! assert_eq!(layout.label(layout.first_tick_bp), "29 mb");
//! ```

mod error;
mod events;
mod modes;
mod ticks;
mod viewport;

pub use error::UnknownChromosome;
pub use events::{ListenerId, LocusChanged};
pub use modes::{TickLadder, ZoomFloor};
pub use ticks::{Tick, TickLayout, TickUnit, Ticks, nice_spacing, tick_layout};
pub use viewport::{DEFAULT_ZOOM_STEP, MIN_SPAN_BP, ViewportDebugInfo, ViewportEngine};
