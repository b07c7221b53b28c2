// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A visible window over a chromosome, in base pairs.
///
/// Coordinates are kept as `f64` because zooming and panning produce
/// fractional positions; use [`GenomicRange::whole_bp`] to obtain the
/// whole-base-pair values shown to users.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GenomicRange {
    /// First visible base pair.
    pub start_bp: f64,
    /// End of the visible window.
    pub end_bp: f64,
}

impl GenomicRange {
    /// Creates a range from its two edges.
    #[must_use]
    pub const fn new(start_bp: f64, end_bp: f64) -> Self {
        Self { start_bp, end_bp }
    }

    /// Width of the range in base pairs.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_bp - self.start_bp
    }

    /// Center of the range.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.start_bp + self.end_bp) * 0.5
    }

    /// Returns `true` if `bp` lies within `[start_bp, end_bp]`.
    #[must_use]
    pub fn contains(&self, bp: f64) -> bool {
        bp >= self.start_bp && bp <= self.end_bp
    }

    /// Returns a copy shifted by `delta_bp`. The span is unchanged.
    #[must_use]
    pub fn translated(&self, delta_bp: f64) -> Self {
        Self::new(self.start_bp + delta_bp, self.end_bp + delta_bp)
    }

    /// Truncates both edges to whole base pairs.
    ///
    /// Negative or non-finite edges saturate at zero.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "edges are clamped into chromosome bounds, which fit in u64"
    )]
    pub fn whole_bp(&self) -> (u64, u64) {
        (
            self.start_bp.max(0.0).trunc() as u64,
            self.end_bp.max(0.0).trunc() as u64,
        )
    }

    /// Converts to a standard range.
    #[must_use]
    pub fn to_range(self) -> Range<f64> {
        self.start_bp..self.end_bp
    }
}

impl From<Range<f64>> for GenomicRange {
    fn from(range: Range<f64>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// The resolved extent of a single chromosome: `[lower_bp, upper_bp)`.
///
/// Bounds are immutable once resolved from a catalog. `lower_bp` is always
/// zero and `upper_bp` is the chromosome length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChromosomeBounds {
    /// Chromosome identifier, e.g. `"chr7"`.
    pub chr: String,
    /// Lower bound in base pairs.
    pub lower_bp: u64,
    /// Upper bound in base pairs (the chromosome length).
    pub upper_bp: u64,
}

impl ChromosomeBounds {
    /// Bounds `[0, length)` for the named chromosome.
    #[must_use]
    pub fn new(chr: impl Into<String>, length: u64) -> Self {
        Self {
            chr: chr.into(),
            lower_bp: 0,
            upper_bp: length,
        }
    }

    /// Lower bound as a floating-point coordinate.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "chromosome lengths are far below 2^53"
    )]
    pub fn lower(&self) -> f64 {
        self.lower_bp as f64
    }

    /// Upper bound as a floating-point coordinate.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "chromosome lengths are far below 2^53"
    )]
    pub fn upper(&self) -> f64 {
        self.upper_bp as f64
    }

    /// Length of the chromosome in base pairs.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.upper_bp - self.lower_bp
    }

    /// The whole chromosome as a [`GenomicRange`].
    #[must_use]
    pub fn full_range(&self) -> GenomicRange {
        GenomicRange::new(self.lower(), self.upper())
    }

    /// Clamps a single coordinate into the bounds.
    #[must_use]
    pub fn clamp(&self, bp: f64) -> f64 {
        bp.clamp(self.lower(), self.upper())
    }

    /// Translates `range` back inside the bounds without changing its span.
    ///
    /// If the span is wider than the chromosome, the full chromosome is
    /// returned instead.
    #[must_use]
    pub fn shift_inside(&self, range: GenomicRange) -> GenomicRange {
        let (lower, upper) = (self.lower(), self.upper());
        let span = range.span();
        if span >= upper - lower {
            return self.full_range();
        }
        if range.start_bp < lower {
            GenomicRange::new(lower, lower + span)
        } else if range.end_bp > upper {
            GenomicRange::new(upper - span, upper)
        } else {
            range
        }
    }
}
