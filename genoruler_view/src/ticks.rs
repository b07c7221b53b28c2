// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use genoruler_locus::{GenomicRange, format_bp};

use crate::modes::TickLadder;

/// Number of major ticks aimed for across the ruler.
const IDEAL_MAJOR_TICKS: f64 = 10.0;

/// Minor ticks per major tick.
const MINOR_PER_MAJOR: i64 = 10;

/// Display unit for tick labels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickUnit {
    /// Short name used in labels: `"bp"`, `"kb"` or `"mb"`.
    pub name: &'static str,
    /// Base pairs per unit.
    pub scale: f64,
}

impl TickUnit {
    /// Base pairs.
    pub const BP: Self = Self {
        name: "bp",
        scale: 1.0,
    };
    /// Kilobases.
    pub const KB: Self = Self {
        name: "kb",
        scale: 1e3,
    };
    /// Megabases.
    pub const MB: Self = Self {
        name: "mb",
        scale: 1e6,
    };

    /// Picks the unit for a visible span: `mb` from 5 Mb, `kb` from 5 kb,
    /// otherwise `bp`.
    #[must_use]
    pub fn for_span(span_bp: f64) -> Self {
        if span_bp >= 5e6 {
            Self::MB
        } else if span_bp >= 5e3 {
            Self::KB
        } else {
            Self::BP
        }
    }
}

/// A single tick position produced by [`TickLayout::ticks`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick {
    /// Genomic position of the tick.
    pub bp: f64,
    /// `true` for labeled major ticks.
    pub is_major: bool,
}

/// Tick spacing and extent for one draw of the ruler.
///
/// This is a pure function of the visible range and the pixel width; it is
/// recomputed every frame and never stored by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickLayout {
    /// Label unit.
    pub unit: TickUnit,
    /// Distance between major ticks in base pairs.
    pub major_spacing_bp: f64,
    /// Distance between minor ticks in base pairs.
    pub minor_spacing_bp: f64,
    /// Range start rounded down to a minor multiple.
    pub first_tick_bp: f64,
    /// Range end rounded up to a minor multiple.
    pub last_tick_bp: f64,
}

impl TickLayout {
    /// Iterates every minor tick from `first_tick_bp` to `last_tick_bp`.
    ///
    /// Positions are derived from an integer index, so long walks do not
    /// accumulate floating-point drift. Every tenth tick is major.
    #[must_use]
    pub fn ticks(&self) -> Ticks {
        Ticks {
            index: minor_index(self.first_tick_bp, self.minor_spacing_bp),
            last: minor_index(self.last_tick_bp, self.minor_spacing_bp),
            minor_spacing_bp: self.minor_spacing_bp,
        }
    }

    /// Label for a tick: whole units with thousands separators, e.g. `"30 mb"`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "tick positions are non-negative and far below 2^64"
    )]
    pub fn label(&self, bp: f64) -> String {
        let count = (bp / self.unit.scale).floor().max(0.0) as u64;
        format!("{} {}", format_bp(count), self.unit.name)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "tick edges are already rounded to a minor multiple"
)]
fn minor_index(bp: f64, minor_spacing_bp: f64) -> i64 {
    (bp / minor_spacing_bp).round() as i64
}

/// Iterator over the ticks of a [`TickLayout`].
#[derive(Clone, Debug)]
pub struct Ticks {
    index: i64,
    last: i64,
    minor_spacing_bp: f64,
}

impl Iterator for Ticks {
    type Item = Tick;

    #[allow(
        clippy::cast_precision_loss,
        reason = "tick indices stay well within f64's exact integer range"
    )]
    fn next(&mut self) -> Option<Tick> {
        if self.index > self.last {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(Tick {
            bp: index as f64 * self.minor_spacing_bp,
            is_major: index.rem_euclid(MINOR_PER_MAJOR) == 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.last - self.index + 1).unwrap_or(0);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Ticks {}

/// Rounds a raw tick spacing up to a "nice" value.
///
/// The raw spacing is first rounded to the nearest whole base pair (and never
/// below one), then rounded up along `ladder`.
#[must_use]
pub fn nice_spacing(raw_spacing_bp: f64, ladder: TickLadder) -> f64 {
    let raw = raw_spacing_bp.round().max(1.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite f64 is within i32"
    )]
    let exponent = raw.log10().floor() as i32;
    let magnitude = 10_f64.powi(exponent);
    match ladder {
        TickLadder::PowerOfTen => (raw / magnitude).ceil() * magnitude,
        TickLadder::OneTwoFive => {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * magnitude;
                if step >= raw {
                    return step;
                }
            }
            10.0 * magnitude
        }
    }
}

/// Computes the tick layout for `range` drawn across `width_px` pixels.
///
/// Returns `None` when the width is not positive or the range is empty or
/// not finite.
#[must_use]
pub fn tick_layout(range: GenomicRange, width_px: f64, ladder: TickLadder) -> Option<TickLayout> {
    let span = range.span();
    if !(width_px > 0.0) || !(span > 0.0) || !span.is_finite() {
        return None;
    }
    let bp_per_pixel = span / width_px;
    let raw_spacing = bp_per_pixel * width_px / IDEAL_MAJOR_TICKS;
    let major_spacing_bp = nice_spacing(raw_spacing, ladder);
    let minor_spacing_bp = major_spacing_bp / 10.0;
    Some(TickLayout {
        unit: TickUnit::for_span(span),
        major_spacing_bp,
        minor_spacing_bp,
        first_tick_bp: (range.start_bp / minor_spacing_bp).floor() * minor_spacing_bp,
        last_tick_bp: (range.end_bp / minor_spacing_bp).ceil() * minor_spacing_bp,
    })
}
