// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether zooming in is stopped at the minimum span.
///
/// This enum is consulted by [`crate::ViewportEngine::zoom_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomFloor {
    /// Never zoom in past [`crate::MIN_SPAN_BP`].
    ///
    /// When a zoom step would cross the floor, the span is set to exactly the
    /// floor and the base pair under the cursor keeps its screen position.
    #[default]
    MinSpan,
    /// Only chromosome bounds limit the range; zooming in is unbounded.
    ///
    /// Tick layout stays total in this mode because raw tick spacing is never
    /// rounded below one base pair.
    Unbounded,
}

/// Which "nice" values major tick spacing is rounded up to.
///
/// This enum is consulted by [`crate::tick_layout`] and
/// [`crate::ViewportEngine::compute_tick_layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickLadder {
    /// Round up to the next integer multiple of the leading power of ten,
    /// so `137_000` becomes `200_000`.
    #[default]
    PowerOfTen,
    /// Round up along the `1, 2, 5, 10` ladder, so `137_000` becomes
    /// `200_000` and `310_000` becomes `500_000`.
    OneTwoFive,
}
