// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Visual parameters of the ruler. All lengths are in CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerStyle {
    /// Background fill.
    pub background: Color,
    /// Tick and label color.
    pub foreground: Color,
    /// Tick stroke width.
    pub tick_width: f64,
    /// Height of minor ticks, measured down from the top edge.
    pub minor_tick_height: f64,
    /// Height of major ticks, measured down from the top edge.
    pub major_tick_height: f64,
    /// Y coordinate of the label baseline.
    pub label_baseline: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label font family.
    pub font_family: String,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xf5, 0xf5, 0xf5),
            foreground: Color::from_rgb8(0x33, 0x33, 0x33),
            tick_width: 1.0,
            minor_tick_height: 10.0,
            major_tick_height: 20.0,
            label_baseline: 40.0,
            font_size: 12.0,
            font_family: "sans-serif".into(),
        }
    }
}
