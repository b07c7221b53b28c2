// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `genoruler_render_svg` crate.
//!
//! These render a whole ruler frame into an `SvgSurface` and check the
//! exported document.

use genoruler_locus::ChromosomeTable;
use genoruler_render::{RulerRenderer, RulerStyle};
use genoruler_render_svg::SvgSurface;
use genoruler_view::ViewportEngine;
use kurbo::Size;

#[test]
fn chr7_ruler_exports_as_svg() {
    let mut engine = ViewportEngine::new(ChromosomeTable::grch38());
    engine
        .set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0)
        .unwrap();
    let range = engine.range().unwrap();
    let layout = engine.compute_tick_layout(800.0).unwrap();

    let mut svg = SvgSurface::new();
    RulerRenderer::default().draw(&mut svg, range, &layout, Size::new(800.0, 60.0), 2.0);
    let doc = svg.to_svg(1_600, 120);

    assert!(doc.contains("width=\"1600\" height=\"120\""));
    assert!(doc.contains("fill=\"#f5f5f5\""));
    assert_eq!(doc.matches("<line ").count(), 101);
    assert_eq!(doc.matches("<text ").count(), 11);
    assert!(doc.contains(">30 mb</text>"));
    assert!(doc.contains(">40 mb</text>"));
    assert!(doc.contains("transform=\"matrix(2 0 0 2 0 0)\""));
}

#[test]
fn font_family_is_escaped_in_attributes() {
    let mut engine = ViewportEngine::new(ChromosomeTable::grch38());
    engine.set_chromosome("chr21").unwrap();
    let style = RulerStyle {
        font_family: "\"Fira Sans\", serif".into(),
        ..RulerStyle::default()
    };

    let mut svg = SvgSurface::new();
    RulerRenderer::new(style).draw(
        &mut svg,
        engine.range().unwrap(),
        &engine.compute_tick_layout(500.0).unwrap(),
        Size::new(500.0, 60.0),
        1.0,
    );
    let doc = svg.to_svg(500, 60);
    assert!(doc.contains("font-family=\"&quot;Fira Sans&quot;, serif\""));
}

#[test]
fn redrawing_keeps_one_frame_of_ops() {
    let mut engine = ViewportEngine::new(ChromosomeTable::grch38());
    engine
        .set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0)
        .unwrap();
    let renderer = RulerRenderer::default();
    let size = Size::new(800.0, 60.0);

    let mut svg = SvgSurface::new();
    let draw = |svg: &mut SvgSurface, engine: &ViewportEngine| {
        let range = engine.range().unwrap();
        let layout = engine.compute_tick_layout(size.width).unwrap();
        renderer.draw(svg, range, &layout, size, 2.0);
    };
    draw(&mut svg, &engine);
    draw(&mut svg, &engine);
    let one_frame = svg.ops().len();

    for i in 0..1_000 {
        let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
        engine.zoom_at(400.0, size.width, sign);
        draw(&mut svg, &engine);
        assert!(
            svg.ops().len() < 2 * one_frame,
            "frame {i}: {} ops",
            svg.ops().len()
        );
    }

    engine
        .set_genomic_locus("chr7", 30_000_000.0, 40_000_000.0)
        .unwrap();
    draw(&mut svg, &engine);
    assert_eq!(svg.ops().len(), one_frame);
    assert_eq!(svg.to_svg(1_600, 120).matches("<line ").count(), 101);
}
