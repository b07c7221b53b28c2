// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use genoruler_locus::{
    ChromosomeBounds, ChromosomeCatalog, ChromosomeTable, GenomicRange, LocusQuery,
};
use kurbo::Point;

use crate::error::UnknownChromosome;
use crate::events::{ListenerId, Listeners, LocusChanged};
use crate::modes::{TickLadder, ZoomFloor};
use crate::ticks::{TickLayout, tick_layout};

/// Smallest visible span in base pairs.
pub const MIN_SPAN_BP: f64 = 100.0;

/// Fraction by which one wheel step grows or shrinks the span.
pub const DEFAULT_ZOOM_STEP: f64 = 0.008;

// Spans this close to the floor count as already at it.
const SPAN_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug)]
struct Anchor {
    bounds: ChromosomeBounds,
    range: GenomicRange,
}

impl Anchor {
    fn locus(&self) -> LocusChanged {
        let (start_bp, end_bp) = self.range.whole_bp();
        LocusChanged {
            chr: self.bounds.chr.clone(),
            start_bp,
            end_bp,
        }
    }
}

fn notify(listeners: &mut Listeners, anchor: &Anchor) -> LocusChanged {
    let event = anchor.locus();
    log::debug!("locus changed: {event}");
    listeners.emit(&event);
    event
}

/// Viewport over one chromosome of a [`ChromosomeCatalog`].
///
/// `ViewportEngine` is the single owner of the visible [`GenomicRange`] and
/// the [`ChromosomeBounds`] it is anchored to. All range mutations go through
/// it, and every mutation that changes the range is reported to listeners
/// registered with [`ViewportEngine::on_locus_changed`].
///
/// The engine starts unanchored. The first successful
/// [`ViewportEngine::set_genomic_locus`] (or one of its wrappers) resolves a
/// chromosome; until then pan/zoom are no-ops and conversions return `None`.
///
/// Invariants while anchored:
/// - `lower_bp <= start_bp < end_bp <= upper_bp`.
/// - `end_bp - start_bp >= MIN_SPAN_BP`, or the whole chromosome when it is
///   shorter. Zoom respects this only under [`ZoomFloor::MinSpan`].
pub struct ViewportEngine<C = ChromosomeTable> {
    catalog: C,
    anchor: Option<Anchor>,
    zoom_step: f64,
    zoom_floor: ZoomFloor,
    tick_ladder: TickLadder,
    listeners: Listeners,
}

impl<C: ChromosomeCatalog> ViewportEngine<C> {
    /// Creates an unanchored engine resolving chromosomes through `catalog`.
    ///
    /// - Zoom step is [`DEFAULT_ZOOM_STEP`].
    /// - Zoom-in stops at [`MIN_SPAN_BP`].
    /// - Tick spacing uses [`TickLadder::PowerOfTen`].
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            anchor: None,
            zoom_step: DEFAULT_ZOOM_STEP,
            zoom_floor: ZoomFloor::default(),
            tick_ladder: TickLadder::default(),
            listeners: Listeners::default(),
        }
    }

    /// Returns the catalog used to resolve chromosomes.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns a copy of the visible range, if anchored.
    #[must_use]
    pub fn range(&self) -> Option<GenomicRange> {
        self.anchor.as_ref().map(|a| a.range)
    }

    /// Returns the active chromosome bounds, if anchored.
    #[must_use]
    pub fn bounds(&self) -> Option<&ChromosomeBounds> {
        self.anchor.as_ref().map(|a| &a.bounds)
    }

    /// Returns the current locus in whole base pairs, if anchored.
    #[must_use]
    pub fn locus(&self) -> Option<LocusChanged> {
        self.anchor.as_ref().map(Anchor::locus)
    }

    /// Sets the fraction one wheel step zooms by.
    ///
    /// The step is clamped into `[0, 0.9]`; zero disables wheel zoom.
    pub fn set_zoom_step(&mut self, step: f64) {
        self.zoom_step = if step.is_finite() { step.clamp(0.0, 0.9) } else { DEFAULT_ZOOM_STEP };
    }

    /// Returns the current zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets whether zooming in stops at [`MIN_SPAN_BP`].
    pub fn set_zoom_floor(&mut self, floor: ZoomFloor) {
        self.zoom_floor = floor;
    }

    /// Returns the current zoom floor.
    #[must_use]
    pub fn zoom_floor(&self) -> ZoomFloor {
        self.zoom_floor
    }

    /// Sets the ladder used to round major tick spacing.
    pub fn set_tick_ladder(&mut self, ladder: TickLadder) {
        self.tick_ladder = ladder;
    }

    /// Returns the current tick ladder.
    #[must_use]
    pub fn tick_ladder(&self) -> TickLadder {
        self.tick_ladder
    }

    /// Registers a listener called after every change of the visible range.
    pub fn on_locus_changed(&mut self, listener: impl FnMut(&LocusChanged) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Anchors the viewport to `chr` and shows `[start_bp, end_bp]`.
    ///
    /// The request is clamped into the chromosome; a span below
    /// [`MIN_SPAN_BP`] is widened symmetrically around its midpoint and then
    /// translated back inside the bounds. Reversed edges are swapped and
    /// non-finite edges fall back to the chromosome edge.
    ///
    /// This is the only operation that can change the active chromosome. On
    /// error the previous state is kept.
    pub fn set_genomic_locus(
        &mut self,
        chr: &str,
        start_bp: f64,
        end_bp: f64,
    ) -> Result<LocusChanged, UnknownChromosome> {
        let Some(bounds) = self.catalog.bounds_of(chr) else {
            log::warn!("chromosome '{chr}' not found in catalog");
            return Err(UnknownChromosome { name: chr.into() });
        };
        let range = resolve_range(&bounds, start_bp, end_bp);
        let anchor = self.anchor.insert(Anchor { bounds, range });
        Ok(notify(&mut self.listeners, anchor))
    }

    /// Shows the whole of `chr`.
    pub fn set_chromosome(&mut self, chr: &str) -> Result<LocusChanged, UnknownChromosome> {
        self.set_genomic_locus(chr, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Applies a parsed locus: a region or a whole chromosome.
    #[allow(
        clippy::cast_precision_loss,
        reason = "parsed positions are base-pair counts far below 2^53"
    )]
    pub fn set_locus(&mut self, query: &LocusQuery) -> Result<LocusChanged, UnknownChromosome> {
        match query {
            LocusQuery::Chromosome { chr } => self.set_chromosome(chr),
            LocusQuery::Region {
                chr,
                start_bp,
                end_bp,
            } => self.set_genomic_locus(chr, *start_bp as f64, *end_bp as f64),
        }
    }

    /// Zooms about the base pair under `pixel_offset_x`.
    ///
    /// A positive `wheel_delta_sign` zooms out by `1 + step`, a negative one
    /// zooms in by `1 - step`, and zero does nothing. Only the sign is used.
    /// The base pair under the cursor keeps its screen position unless an
    /// edge is clamped to the chromosome bounds.
    ///
    /// Returns `true` if the visible range changed.
    pub fn zoom_at(&mut self, pixel_offset_x: f64, canvas_width_px: f64, wheel_delta_sign: f64) -> bool {
        let zoom_step = self.zoom_step;
        let zoom_floor = self.zoom_floor;
        let Some(anchor) = self.anchor.as_mut() else {
            return false;
        };
        if !(canvas_width_px > 0.0) || !pixel_offset_x.is_finite() || wheel_delta_sign.is_nan() {
            return false;
        }
        let zooming_out = if wheel_delta_sign > 0.0 {
            true
        } else if wheel_delta_sign < 0.0 {
            false
        } else {
            return false;
        };

        let bounds = &anchor.bounds;
        let old = anchor.range;
        let floor = zoom_floor == ZoomFloor::MinSpan;
        if !zooming_out && floor && old.span() <= MIN_SPAN_BP + SPAN_EPSILON {
            return false;
        }

        let factor = if zooming_out { 1.0 + zoom_step } else { 1.0 - zoom_step };
        let center = old.start_bp + (pixel_offset_x / canvas_width_px) * old.span();
        let mut next = GenomicRange::new(
            (center - (center - old.start_bp) * factor).max(bounds.lower()),
            (center + (old.end_bp - center) * factor).min(bounds.upper()),
        );

        if floor && next.span() < MIN_SPAN_BP {
            let fraction = ((center - old.start_bp) / old.span()).clamp(0.0, 1.0);
            let start = center - fraction * MIN_SPAN_BP;
            next = bounds.shift_inside(GenomicRange::new(start, start + MIN_SPAN_BP));
        }

        if !(next.span() > 0.0) || next == old {
            return false;
        }
        anchor.range = next;
        notify(&mut self.listeners, anchor);
        true
    }

    /// Pans by a pixel delta; dragging right reveals lower coordinates.
    ///
    /// When an edge would leave the chromosome both edges are translated back
    /// together, so the span is never changed by panning.
    ///
    /// Returns `true` if the visible range changed.
    pub fn pan_by(&mut self, delta_pixel_x: f64, canvas_width_px: f64) -> bool {
        let Some(anchor) = self.anchor.as_mut() else {
            return false;
        };
        if delta_pixel_x == 0.0 || !delta_pixel_x.is_finite() || !(canvas_width_px > 0.0) {
            return false;
        }
        let old = anchor.range;
        let delta_bp = delta_pixel_x * old.span() / canvas_width_px;
        let next = anchor.bounds.shift_inside(old.translated(-delta_bp));
        if next == old {
            return false;
        }
        anchor.range = next;
        notify(&mut self.listeners, anchor);
        true
    }

    /// Computes the tick layout for the current range across `canvas_width_px`.
    ///
    /// Returns `None` while unanchored or for a non-positive width.
    #[must_use]
    pub fn compute_tick_layout(&self, canvas_width_px: f64) -> Option<TickLayout> {
        tick_layout(self.range()?, canvas_width_px, self.tick_ladder)
    }

    /// Base pairs covered by one pixel.
    #[must_use]
    pub fn bp_per_pixel(&self, canvas_width_px: f64) -> Option<f64> {
        if !(canvas_width_px > 0.0) {
            return None;
        }
        Some(self.range()?.span() / canvas_width_px)
    }

    /// Converts a pixel offset into a genomic coordinate.
    #[must_use]
    pub fn pixel_to_bp(&self, pixel_x: f64, canvas_width_px: f64) -> Option<f64> {
        let bpp = self.bp_per_pixel(canvas_width_px)?;
        Some(self.range()?.start_bp + pixel_x * bpp)
    }

    /// Converts a genomic coordinate into a pixel offset.
    #[must_use]
    pub fn bp_to_pixel(&self, bp: f64, canvas_width_px: f64) -> Option<f64> {
        let bpp = self.bp_per_pixel(canvas_width_px)?;
        Some((bp - self.range()?.start_bp) / bpp)
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    ///
    /// This helper ignores the point's Y coordinate; the ruler has a single
    /// genomic axis.
    #[must_use]
    pub fn bp_at_point(&self, pt: Point, canvas_width_px: f64) -> Option<f64> {
        self.pixel_to_bp(pt.x, canvas_width_px)
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            bounds: self.bounds().cloned(),
            range: self.range(),
            zoom_step: self.zoom_step,
            zoom_floor: self.zoom_floor,
            tick_ladder: self.tick_ladder,
            listener_count: self.listeners.len(),
        }
    }

}

impl<C: core::fmt::Debug> core::fmt::Debug for ViewportEngine<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportEngine")
            .field("catalog", &self.catalog)
            .field("anchor", &self.anchor)
            .field("zoom_step", &self.zoom_step)
            .field("zoom_floor", &self.zoom_floor)
            .field("tick_ladder", &self.tick_ladder)
            .field("listeners", &self.listeners)
            .finish()
    }
}

fn resolve_range(bounds: &ChromosomeBounds, start_bp: f64, end_bp: f64) -> GenomicRange {
    let (lower, upper) = (bounds.lower(), bounds.upper());
    let start = if start_bp.is_nan() { lower } else { start_bp };
    let end = if end_bp.is_nan() { upper } else { end_bp };
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let clamped = GenomicRange::new(bounds.clamp(start), bounds.clamp(end));
    if clamped.span() >= MIN_SPAN_BP {
        return clamped;
    }
    if upper - lower <= MIN_SPAN_BP {
        return bounds.full_range();
    }
    let mid = clamped.midpoint();
    let half = MIN_SPAN_BP * 0.5;
    bounds.shift_inside(GenomicRange::new(mid - half, mid + half))
}

/// Debug snapshot of a [`ViewportEngine`] state.
#[derive(Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Active chromosome bounds, if anchored.
    pub bounds: Option<ChromosomeBounds>,
    /// Visible range, if anchored.
    pub range: Option<GenomicRange>,
    /// Fraction one wheel step zooms by.
    pub zoom_step: f64,
    /// Zoom-in floor policy.
    pub zoom_floor: ZoomFloor,
    /// Tick spacing ladder.
    pub tick_ladder: TickLadder,
    /// Number of registered change listeners.
    pub listener_count: usize,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use genoruler_locus::{ChromosomeTable, GenomicRange, LocusQuery};
    use kurbo::Point;

    use super::{MIN_SPAN_BP, ViewportEngine, ZoomFloor};
    use crate::events::LocusChanged;
    use crate::ticks::TickUnit;

    const W: f64 = 800.0;

    fn engine() -> ViewportEngine {
        ViewportEngine::new(ChromosomeTable::grch38())
    }

    fn recorder(engine: &mut ViewportEngine) -> Rc<RefCell<Vec<LocusChanged>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        engine.on_locus_changed(move |e| sink.borrow_mut().push(e.clone()));
        seen
    }

    #[test]
    fn chr7_scenario() {
        let mut e = engine();
        let seen = recorder(&mut e);
        let changed = e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();

        assert_eq!(e.range(), Some(GenomicRange::new(30_000_000.0, 40_000_000.0)));
        assert_eq!(e.bounds().unwrap().upper_bp, 159_345_973);
        assert_eq!(e.compute_tick_layout(W).unwrap().unit, TickUnit::MB);
        assert_eq!(
            changed,
            LocusChanged {
                chr: "chr7".into(),
                start_bp: 30_000_000,
                end_bp: 40_000_000,
            }
        );
        assert_eq!(seen.borrow().as_slice(), &[changed]);
    }

    #[test]
    fn short_request_recenters_then_reclamps() {
        let mut e = engine();
        e.set_genomic_locus("chr1", -500.0, 50.0).unwrap();
        assert_eq!(e.range(), Some(GenomicRange::new(0.0, 100.0)));
    }

    #[test]
    fn short_request_in_the_middle_is_widened_symmetrically() {
        let mut e = engine();
        e.set_genomic_locus("chr2", 1_000.0, 1_010.0).unwrap();
        assert_eq!(e.range(), Some(GenomicRange::new(955.0, 1_055.0)));
    }

    #[test]
    fn chromosome_shorter_than_min_span_is_shown_whole() {
        let mut e = ViewportEngine::new(ChromosomeTable::from_iter([("chrM", 60_u64)]));
        e.set_genomic_locus("chrM", 10.0, 20.0).unwrap();
        assert_eq!(e.range(), Some(GenomicRange::new(0.0, 60.0)));
    }

    #[test]
    fn reversed_and_out_of_range_edges_are_normalized() {
        let mut e = engine();
        e.set_genomic_locus("chr21", 50_000_000.0, 46_000_000.0).unwrap();
        assert_eq!(e.range(), Some(GenomicRange::new(46_000_000.0, 46_709_983.0)));
    }

    #[test]
    fn unknown_chromosome_keeps_previous_state() {
        let mut e = engine();
        let seen = recorder(&mut e);
        e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
        let err = e.set_genomic_locus("chr99", 0.0, 1_000.0).unwrap_err();
        assert_eq!(err.name, "chr99");
        assert_eq!(err.to_string(), "Unknown chromosome: chr99");
        assert_eq!(e.bounds().unwrap().chr, "chr7");
        assert_eq!(e.range(), Some(GenomicRange::new(30_000_000.0, 40_000_000.0)));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn set_locus_dispatches_both_forms() {
        let mut e = engine();
        e.set_locus(&LocusQuery::Chromosome { chr: "chr5".into() }).unwrap();
        assert_eq!(e.range(), Some(GenomicRange::new(0.0, 181_538_259.0)));

        e.set_locus(&LocusQuery::Region {
            chr: "chr12".into(),
            start_bp: 50_464_921,
            end_bp: 53_983_987,
        })
        .unwrap();
        assert_eq!(e.locus().unwrap().to_string(), "chr12:50,464,921-53,983,987");
    }

    #[test]
    fn unanchored_engine_ignores_gestures() {
        let mut e = engine();
        assert!(!e.zoom_at(400.0, W, 1.0));
        assert!(!e.pan_by(10.0, W));
        assert!(e.compute_tick_layout(W).is_none());
        assert!(e.bp_per_pixel(W).is_none());
    }

    #[test]
    fn zero_inputs_are_idempotent() {
        let mut e = engine();
        e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
        let seen = recorder(&mut e);
        let before = e.range();

        assert!(!e.pan_by(0.0, W));
        assert!(!e.zoom_at(400.0, W, 0.0));
        assert!(!e.zoom_at(400.0, 0.0, 1.0));
        assert!(!e.pan_by(10.0, -1.0));

        assert_eq!(e.range(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn zoom_keeps_cursor_base_pair_fixed() {
        let mut e = engine();
        e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
        let x = 200.0;
        let before = e.pixel_to_bp(x, W).unwrap();

        assert!(e.zoom_at(x, W, -1.0));
        let after = e.pixel_to_bp(x, W).unwrap();
        assert!((after - before).abs() < 1e-6);
        assert!((e.range().unwrap().span() - 10_000_000.0 * 0.992).abs() < 1e-6);

        assert!(e.zoom_at(x, W, 3.5));
        let again = e.pixel_to_bp(x, W).unwrap();
        assert!((again - before).abs() < 1e-6);
    }

    #[test]
    fn zoom_out_converges_to_bounds_without_overshoot() {
        for x in [1.0, 123.0, 400.0, 799.0] {
            let mut e = engine();
            e.set_genomic_locus("chr22", 20_000_000.0, 20_001_000.0).unwrap();
            let mut steps = 0;
            while e.zoom_at(x, W, 1.0) {
                let r = e.range().unwrap();
                assert!(r.start_bp >= 0.0 && r.end_bp <= 50_818_468.0, "overshoot at x={x}");
                steps += 1;
                assert!(steps < 10_000, "zoom out did not converge at x={x}");
            }
            assert_eq!(e.range(), Some(GenomicRange::new(0.0, 50_818_468.0)));
        }
    }

    #[test]
    fn zoom_in_stops_at_min_span() {
        let mut e = engine();
        e.set_genomic_locus("chr3", 1_000_000.0, 1_000_500.0).unwrap();
        let mut steps = 0;
        while e.zoom_at(600.0, W, -1.0) {
            let r = e.range().unwrap();
            assert!(r.span() >= MIN_SPAN_BP - 1e-9, "span {} below floor", r.span());
            steps += 1;
            assert!(steps < 10_000, "zoom in did not stop");
        }
        assert!((e.range().unwrap().span() - MIN_SPAN_BP).abs() < 1e-9);
    }

    #[test]
    fn unbounded_zoom_floor_allows_subminimal_spans() {
        let mut e = engine();
        e.set_zoom_floor(ZoomFloor::Unbounded);
        e.set_genomic_locus("chr3", 1_000_000.0, 1_000_100.0).unwrap();
        for _ in 0..200 {
            e.zoom_at(400.0, W, -1.0);
        }
        let r = e.range().unwrap();
        assert!(r.span() < MIN_SPAN_BP);
        assert!(r.span() > 0.0);
        // 100 * 0.992^200 is just over 20 bp.
        let layout = e.compute_tick_layout(W).unwrap();
        assert_eq!(layout.major_spacing_bp, 2.0);
        assert_eq!(layout.unit.name, "bp");
    }

    #[test]
    fn pan_shifts_by_pixels_and_reveals_left_on_drag_right() {
        let mut e = engine();
        e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
        assert!(e.pan_by(80.0, W));
        assert_eq!(e.range(), Some(GenomicRange::new(29_000_000.0, 39_000_000.0)));
        assert!(e.pan_by(-160.0, W));
        assert_eq!(e.range(), Some(GenomicRange::new(31_000_000.0, 41_000_000.0)));
    }

    #[test]
    fn pan_clamps_without_changing_span() {
        let mut e = engine();
        e.set_genomic_locus("chr7", 1_000_000.0, 11_000_000.0).unwrap();
        let span = e.range().unwrap().span();

        assert!(e.pan_by(10_000.0, W));
        let r = e.range().unwrap();
        assert_eq!(r.start_bp, 0.0);
        assert!((r.span() - span).abs() <= f64::EPSILON * r.end_bp);

        assert!(e.pan_by(-1_000_000.0, W));
        let r = e.range().unwrap();
        assert_eq!(r.end_bp, 159_345_973.0);
        assert!((r.span() - span).abs() <= f64::EPSILON * r.end_bp);

        // Already at the upper edge.
        assert!(!e.pan_by(-50.0, W));
    }

    #[test]
    fn conversions_roundtrip() {
        let mut e = engine();
        e.set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0).unwrap();
        assert_eq!(e.bp_per_pixel(W), Some(12_500.0));
        let bp = e.pixel_to_bp(123.25, W).unwrap();
        let x = e.bp_to_pixel(bp, W).unwrap();
        assert!((x - 123.25).abs() < 1e-9);
        let from_point = e.bp_at_point(Point::new(123.25, 999.0), W).unwrap();
        assert_eq!(from_point, bp);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let mut e = engine();
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        let id = e.on_locus_changed(move |_| *sink.borrow_mut() += 1);
        e.set_chromosome("chr1").unwrap();
        assert!(e.remove_listener(id));
        assert!(!e.remove_listener(id));
        e.set_chromosome("chr2").unwrap();
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(e.debug_info().listener_count, 0);
    }
}
