// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genoruler Locus: the leaf vocabulary shared by every genoruler crate.
//!
//! This crate provides:
//! - [`GenomicRange`]: a visible window `[start_bp, end_bp)` in base pairs.
//! - [`ChromosomeBounds`]: the resolved `[0, length)` extent of one chromosome.
//! - [`ChromosomeCatalog`]: a read-only lookup from chromosome name to length,
//!   with [`ChromosomeTable`] as the in-memory implementation and
//!   [`ChromosomeTable::grch38`] as the built-in human assembly table.
//! - A locus text codec: [`parse_locus`] turns free text such as
//!   `"chr12:50,464,921-53,983,987"` or `"5"` into a [`LocusQuery`], and
//!   [`format_locus`] / [`format_bp`] render ranges back with thousands
//!   separators.
//!
//! It does **not** own any viewport state. The viewport engine lives in
//! `genoruler_view` and consumes these types.
//!
//! ## Minimal example
//!
//! ```rust
//! use genoruler_locus::{ChromosomeCatalog, ChromosomeTable, LocusQuery, format_locus, parse_locus};
//!
//! let catalog = ChromosomeTable::grch38();
//! assert_eq!(catalog.length_of("chr7"), Some(159_345_973));
//!
//! let query = parse_locus("chr12:50,464,921-53,983,987").unwrap();
//! assert_eq!(
//!     query,
//!     LocusQuery::Region {
//!         chr: "chr12".into(),
//!         start_bp: 50_464_921,
//!         end_bp: 53_983_987,
//!     }
//! );
//!
//! assert_eq!(format_locus("chr7", 30_000_000, 40_000_000), "chr7:30,000,000-40,000,000");
//! ```

mod catalog;
mod codec;
mod range;

pub use catalog::{ChromosomeCatalog, ChromosomeTable};
pub use codec::{LocusQuery, ParseError, format_bp, format_locus, parse_locus};
pub use range::{ChromosomeBounds, GenomicRange};
