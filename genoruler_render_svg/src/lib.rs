// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface for genoruler.
//!
//! [`SvgSurface`] implements [`RulerSurface`] by recording ops and can export
//! them as a standalone SVG document with [`SvgSurface::to_svg`].
//!
//! This is intended for snapshots and inspection:
//! - SVG has no erase, so [`DrawOp::Clear`] starts a new frame and drops
//!   everything drawn before it. Only the current frame's ops and the state
//!   they start from are kept, so a surface redrawn on every pointer move
//!   stays bounded.
//! - Text is emitted as `<text>` elements; glyph layout is left to the viewer.
//!
//! ## Minimal example
//!
//! ```rust
//! use genoruler_render::{DrawOp, RulerSurface, StateOp};
//! use genoruler_render_svg::SvgSurface;
//! use kurbo::Rect;
//! use peniko::Color;
//!
//! let mut svg = SvgSurface::new();
//! svg.state(StateOp::SetFill(Color::from_rgb8(0xf5, 0xf5, 0xf5)));
//! svg.draw(DrawOp::FillRect(Rect::new(0.0, 0.0, 100.0, 50.0)));
//! let doc = svg.to_svg(100, 50);
//! assert!(doc.contains("fill=\"#f5f5f5\""));
//! ```

use core::fmt::Write as _;

use genoruler_render::{DrawOp, RulerSurface, StateOp, SurfaceOp, TextAlign};
use kurbo::Affine;
use peniko::Color;

#[derive(Clone, Debug)]
struct SvgState {
    transform: Affine,
    fill: Color,
    stroke: (Color, f64),
    font: (f64, String),
    text_align: TextAlign,
}

impl Default for SvgState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Color::BLACK,
            stroke: (Color::BLACK, 1.0),
            font: (10.0, "sans-serif".into()),
            text_align: TextAlign::Start,
        }
    }
}

/// A recording SVG surface.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    ops: Vec<SurfaceOp>,
}

impl SvgSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded ops.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears the recorded ops.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Exports the recorded ops as an SVG document.
    ///
    /// `width`/`height` are device pixels and are used both as the SVG
    /// `width`/`height` attributes and for `viewBox="0 0 width height"`.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut state = SvgState::default();
        let mut body = String::new();

        for op in &self.ops {
            match op {
                SurfaceOp::State(op) => apply_state(&mut state, op),
                SurfaceOp::Draw(DrawOp::Clear(_)) => body.clear(),
                SurfaceOp::Draw(op) => write_draw_op(&mut body, op, &state),
            }
        }

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        svg.push_str(&body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl RulerSurface for SvgSurface {
    fn state(&mut self, op: StateOp) {
        self.ops.push(SurfaceOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        if let DrawOp::Clear(_) = op {
            self.start_frame();
        }
        self.ops.push(SurfaceOp::Draw(op));
    }
}

impl SvgSurface {
    /// Drops the previous frame, keeping only the state it left behind.
    fn start_frame(&mut self) {
        let mut state = SvgState::default();
        for op in &self.ops {
            if let SurfaceOp::State(op) = op {
                apply_state(&mut state, op);
            }
        }
        self.ops.clear();

        let initial = SvgState::default();
        if state.transform != initial.transform {
            self.ops
                .push(SurfaceOp::State(StateOp::SetTransform(state.transform)));
        }
        if state.fill != initial.fill {
            self.ops.push(SurfaceOp::State(StateOp::SetFill(state.fill)));
        }
        if state.stroke != initial.stroke {
            let (color, width) = state.stroke;
            self.ops
                .push(SurfaceOp::State(StateOp::SetStroke { color, width }));
        }
        if state.font != initial.font {
            let (size, family) = state.font;
            self.ops
                .push(SurfaceOp::State(StateOp::SetFont { size, family }));
        }
        if state.text_align != initial.text_align {
            self.ops
                .push(SurfaceOp::State(StateOp::SetTextAlign(state.text_align)));
        }
    }
}

fn apply_state(state: &mut SvgState, op: &StateOp) {
    match op {
        StateOp::SetTransform(xf) => state.transform = *xf,
        StateOp::SetFill(color) => state.fill = *color,
        StateOp::SetStroke { color, width } => state.stroke = (*color, *width),
        StateOp::SetFont { size, family } => state.font = (*size, family.clone()),
        StateOp::SetTextAlign(align) => state.text_align = *align,
    }
}

fn write_draw_op(out: &mut String, op: &DrawOp, state: &SvgState) {
    let xf = transform_attr(state.transform);
    match op {
        DrawOp::Clear(_) => {}
        DrawOp::FillRect(rect) => {
            let _ = writeln!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}{xf}/>",
                fmt_f64(rect.x0),
                fmt_f64(rect.y0),
                fmt_f64(rect.width()),
                fmt_f64(rect.height()),
                paint_attrs("fill", state.fill),
            );
        }
        DrawOp::StrokeLine(line) => {
            let (color, width) = state.stroke;
            let _ = writeln!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{} stroke-width=\"{}\"{xf}/>",
                fmt_f64(line.p0.x),
                fmt_f64(line.p0.y),
                fmt_f64(line.p1.x),
                fmt_f64(line.p1.y),
                paint_attrs("stroke", color),
                fmt_f64(width),
            );
        }
        DrawOp::FillText { text, origin } => {
            let (size, family) = &state.font;
            let _ = writeln!(
                out,
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{}\" text-anchor=\"{}\"{}{xf}>{}</text>",
                fmt_f64(origin.x),
                fmt_f64(origin.y),
                fmt_f64(*size),
                escape_xml(family),
                text_anchor(state.text_align),
                paint_attrs("fill", state.fill),
                escape_xml(text),
            );
        }
    }
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Center => "middle",
        TextAlign::End => "end",
    }
}

fn paint_attrs(kind: &str, color: Color) -> String {
    let (hex, alpha) = color_to_svg(color);
    if alpha < 1.0 {
        format!(" {kind}=\"{hex}\" {kind}-opacity=\"{}\"", fmt_f64(f64::from(alpha)))
    } else {
        format!(" {kind}=\"{hex}\"")
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn transform_attr(xf: Affine) -> String {
    if xf == Affine::IDENTITY {
        return String::new();
    }
    // [a b c d e f] maps to SVG's matrix(a b c d e f).
    let c = xf.as_coeffs();
    format!(
        " transform=\"matrix({} {} {} {} {} {})\"",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
