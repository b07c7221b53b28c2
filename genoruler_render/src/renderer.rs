// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use genoruler_locus::GenomicRange;
use genoruler_view::TickLayout;
use kurbo::{Affine, Line, Point, Rect, Size};

use crate::ir::{DrawOp, RulerSurface, StateOp, TextAlign};
use crate::style::RulerStyle;

/// Counts of what one [`RulerRenderer::draw`] call emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tick lines stroked.
    pub ticks: usize,
    /// Labels drawn.
    pub labels: usize,
}

/// Stateless ruler painter.
///
/// Geometry is computed in CSS pixels and the surface transform is set to
/// `scale(device_pixel_ratio)`, so backends receive device coordinates.
#[derive(Clone, Debug, Default)]
pub struct RulerRenderer {
    style: RulerStyle,
}

impl RulerRenderer {
    /// Creates a renderer with the given style.
    #[must_use]
    pub fn new(style: RulerStyle) -> Self {
        Self { style }
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    /// Replaces the style.
    pub fn set_style(&mut self, style: RulerStyle) {
        self.style = style;
    }

    /// Draws one frame of the ruler for `range` across a `size` CSS-pixel
    /// surface.
    ///
    /// Ticks whose X falls outside `[0, size.width]` are skipped. Only major
    /// ticks are labeled.
    pub fn draw<S: RulerSurface + ?Sized>(
        &self,
        surface: &mut S,
        range: GenomicRange,
        layout: &TickLayout,
        size: Size,
        device_pixel_ratio: f64,
    ) -> FrameStats {
        let style = &self.style;
        let dpr = if device_pixel_ratio > 0.0 && device_pixel_ratio.is_finite() {
            device_pixel_ratio
        } else {
            1.0
        };
        let bounds = Rect::from_origin_size(Point::ORIGIN, size);

        surface.state(StateOp::SetTransform(Affine::scale(dpr)));
        surface.draw(DrawOp::Clear(bounds));
        surface.state(StateOp::SetFill(style.background));
        surface.draw(DrawOp::FillRect(bounds));

        let mut stats = FrameStats::default();
        let span = range.span();
        if !(size.width > 0.0) || !(span > 0.0) {
            return stats;
        }
        let bp_per_pixel = span / size.width;
        let x_of = |bp: f64| (bp - range.start_bp) / bp_per_pixel;
        let visible = |x: f64| (0.0..=size.width).contains(&x);

        surface.state(StateOp::SetStroke {
            color: style.foreground,
            width: style.tick_width,
        });
        for tick in layout.ticks() {
            let x = x_of(tick.bp);
            if !visible(x) {
                continue;
            }
            let height = if tick.is_major {
                style.major_tick_height
            } else {
                style.minor_tick_height
            };
            surface.draw(DrawOp::StrokeLine(Line::new((x, 0.0), (x, height))));
            stats.ticks += 1;
        }

        surface.state(StateOp::SetFill(style.foreground));
        surface.state(StateOp::SetFont {
            size: style.font_size,
            family: style.font_family.clone(),
        });
        surface.state(StateOp::SetTextAlign(TextAlign::Center));
        for tick in layout.ticks().filter(|t| t.is_major) {
            let x = x_of(tick.bp);
            if !visible(x) {
                continue;
            }
            surface.draw(DrawOp::FillText {
                text: layout.label(tick.bp),
                origin: Point::new(x, style.label_baseline),
            });
            stats.labels += 1;
        }

        log::trace!(
            "drew {} ticks and {} labels at {dpr}x",
            stats.ticks,
            stats.labels
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use genoruler_locus::GenomicRange;
    use genoruler_view::{TickLadder, tick_layout};
    use kurbo::{Affine, Line, Size};

    use super::{FrameStats, RulerRenderer};
    use crate::ir::{DrawOp, RulerSurface, StateOp, SurfaceOp};

    #[derive(Default)]
    struct Ops(Vec<SurfaceOp>);

    impl RulerSurface for Ops {
        fn state(&mut self, op: StateOp) {
            self.0.push(SurfaceOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.0.push(SurfaceOp::Draw(op));
        }
    }

    impl Ops {
        fn lines(&self) -> Vec<Line> {
            self.0
                .iter()
                .filter_map(|op| match op {
                    SurfaceOp::Draw(DrawOp::StrokeLine(l)) => Some(*l),
                    _ => None,
                })
                .collect()
        }

        fn labels(&self) -> Vec<&str> {
            self.0
                .iter()
                .filter_map(|op| match op {
                    SurfaceOp::Draw(DrawOp::FillText { text, .. }) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    fn draw(range: GenomicRange, width: f64, dpr: f64) -> (Ops, FrameStats) {
        let layout = tick_layout(range, width, TickLadder::PowerOfTen).unwrap();
        let mut ops = Ops::default();
        let stats =
            RulerRenderer::default().draw(&mut ops, range, &layout, Size::new(width, 60.0), dpr);
        (ops, stats)
    }

    #[test]
    fn frame_starts_with_transform_and_background() {
        let (ops, _) = draw(GenomicRange::new(0.0, 1_000.0), 500.0, 2.0);
        assert_eq!(
            ops.0[0],
            SurfaceOp::State(StateOp::SetTransform(Affine::scale(2.0)))
        );
        assert!(matches!(ops.0[1], SurfaceOp::Draw(DrawOp::Clear(_))));
        assert!(matches!(ops.0[3], SurfaceOp::Draw(DrawOp::FillRect(_))));
    }

    #[test]
    fn chr7_frame_labels_every_megabase() {
        let (ops, stats) = draw(GenomicRange::new(30_000_000.0, 40_000_000.0), 800.0, 1.0);
        assert_eq!(stats.ticks, 101);
        assert_eq!(stats.labels, 11);
        let labels = ops.labels();
        assert_eq!(labels.first(), Some(&"30 mb"));
        assert_eq!(labels.last(), Some(&"40 mb"));
        assert_eq!(labels[4], "34 mb");

        let lines = ops.lines();
        assert_eq!(lines[0], Line::new((0.0, 0.0), (0.0, 20.0)));
        assert_eq!(lines[1], Line::new((8.0, 0.0), (8.0, 10.0)));
    }

    #[test]
    fn ticks_outside_the_canvas_are_skipped() {
        // Edges round outwards to 12,000 and 68,400, both off-canvas.
        let (ops, stats) = draw(GenomicRange::new(12_345.0, 67_890.0), 1_000.0, 1.0);
        assert!(ops.lines().iter().all(|l| (0.0..=1_000.0).contains(&l.p0.x)));
        assert_eq!(stats.ticks, ops.lines().len());
        assert_eq!(
            ops.labels(),
            ["18 kb", "24 kb", "30 kb", "36 kb", "42 kb", "48 kb", "54 kb", "60 kb", "66 kb"]
        );
    }

    #[test]
    fn zero_width_draws_only_background() {
        let range = GenomicRange::new(0.0, 1_000.0);
        let layout = tick_layout(range, 100.0, TickLadder::PowerOfTen).unwrap();
        let mut ops = Ops::default();
        let stats =
            RulerRenderer::default().draw(&mut ops, range, &layout, Size::new(0.0, 60.0), 1.0);
        assert_eq!(stats, FrameStats::default());
        assert_eq!(ops.0.len(), 4);
    }
}
