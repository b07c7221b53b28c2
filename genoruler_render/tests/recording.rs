// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `genoruler_render` crate.
//!
//! These drive `RulerRenderer` into the recording surface and assert on the
//! state each op was drawn with.

use genoruler_locus::GenomicRange;
use genoruler_render::{DrawOp, RulerRenderer, RulerStyle, TextAlign};
use genoruler_render_ref::RecordingSurface;
use genoruler_view::{TickLadder, tick_layout};
use kurbo::{Affine, Size};

fn record(range: GenomicRange, width: f64, dpr: f64) -> RecordingSurface {
    let layout = tick_layout(range, width, TickLadder::PowerOfTen).unwrap();
    let mut surface = RecordingSurface::new();
    RulerRenderer::default().draw(&mut surface, range, &layout, Size::new(width, 60.0), dpr);
    surface
}

#[test]
fn every_op_is_drawn_under_the_device_scale() {
    let surface = record(GenomicRange::new(30_000_000.0, 40_000_000.0), 800.0, 1.5);
    assert!(surface.draws().count() > 0);
    for (_, state) in surface.draws() {
        assert_eq!(state.transform, Affine::scale(1.5));
    }
    assert_eq!(surface.frames(), 1);
}

#[test]
fn ticks_and_labels_use_the_style() {
    let style = RulerStyle::default();
    let surface = record(GenomicRange::new(30_000_000.0, 40_000_000.0), 800.0, 1.0);

    let mut lines = 0;
    for (op, state) in surface.draws() {
        match op {
            DrawOp::StrokeLine(line) => {
                lines += 1;
                assert_eq!(state.stroke, Some((style.foreground, 1.0)));
                assert!(line.p1.y == 10.0 || line.p1.y == 20.0);
            }
            DrawOp::FillText { origin, .. } => {
                assert_eq!(origin.y, 40.0);
                assert_eq!(state.fill, Some(style.foreground));
                assert_eq!(state.font, Some((12.0, style.font_family.clone())));
                assert_eq!(state.text_align, TextAlign::Center);
            }
            DrawOp::FillRect(_) => assert_eq!(state.fill, Some(style.background)),
            DrawOp::Clear(_) => {}
        }
    }
    assert_eq!(lines, 101);

    let labels: Vec<_> = surface.texts().collect();
    let expected: Vec<_> = (30..=40).map(|m| format!("{m} mb")).collect();
    assert_eq!(labels, expected);
}

#[test]
fn kilobase_window_labels_with_separators() {
    let surface = record(GenomicRange::new(1_200_000.0, 1_300_000.0), 1_000.0, 1.0);
    let labels: Vec<_> = surface.texts().collect();
    assert_eq!(labels.first(), Some(&"1,200 kb"));
    assert_eq!(labels.last(), Some(&"1,300 kb"));
}
