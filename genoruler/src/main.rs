// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a genomic ruler to SVG, optionally after scripted gestures.

use core::time::Duration;
use std::io::Write as _;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use genoruler::config::RulerConfig;
use genoruler::{LocusInputWidget, Ruler};
use genoruler_event_state::interaction::PointerInput;
use genoruler_locus::ChromosomeTable;
use genoruler_render::RulerRenderer;
use genoruler_render_svg::SvgSurface;
use genoruler_view::ViewportEngine;
use kurbo::{Point, Size};

/// Simulated time between scripted events.
const EVENT_INTERVAL: Duration = Duration::from_millis(4);

#[derive(Parser, Debug)]
#[command(name = "genoruler")]
#[command(about = "Render a genomic ruler to SVG")]
#[command(version)]
struct Cli {
    /// Locus to show, e.g. "chr7:30,000,000-40,000,000" or "chrX"
    #[arg(short, long)]
    locus: Option<String>,

    /// TOML configuration file (defaults to ./genoruler.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Surface width in CSS pixels
    #[arg(long)]
    width: Option<f64>,

    /// Surface height in CSS pixels
    #[arg(long)]
    height: Option<f64>,

    /// Device pixel ratio
    #[arg(long)]
    dpr: Option<f64>,

    /// Wheel steps at X with the sign of SIGN, COUNT times (applied before drags)
    #[arg(long, value_name = "X:SIGN[:COUNT]")]
    wheel: Vec<WheelStep>,

    /// Drag from one X to another
    #[arg(long, value_name = "FROM:TO")]
    drag: Vec<DragStep>,

    /// Output SVG file (stdout if absent)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct WheelStep {
    x: f64,
    delta_y: f64,
    count: u32,
}

impl FromStr for WheelStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(x), Some(delta_y)) = (parts.next(), parts.next()) else {
            return Err(format!("expected X:SIGN[:COUNT], got {s:?}"));
        };
        let count = match parts.next() {
            Some(count) => count
                .parse()
                .map_err(|_| format!("invalid wheel count {count:?}"))?,
            None => 1,
        };
        if parts.next().is_some() {
            return Err(format!("expected X:SIGN[:COUNT], got {s:?}"));
        }
        Ok(Self {
            x: parse_number(x)?,
            delta_y: parse_number(delta_y)?,
            count,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragStep {
    from: f64,
    to: f64,
}

impl FromStr for DragStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((from, to)) = s.split_once(':') else {
            return Err(format!("expected FROM:TO, got {s:?}"));
        };
        Ok(Self {
            from: parse_number(from)?,
            to: parse_number(to)?,
        })
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid number {s:?}"))
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = RulerConfig::load(cli.config.as_deref())?;
    if let Some(locus) = cli.locus {
        config.locus = locus;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(dpr) = cli.dpr {
        config.device_pixel_ratio = dpr;
    }
    config.validate().context("invalid ruler settings")?;

    let mut engine = ViewportEngine::new(ChromosomeTable::grch38());
    config.configure_engine(&mut engine);
    let style = config.style.to_style()?;
    let mut ruler = Ruler::new(
        engine,
        SvgSurface::new(),
        Size::new(config.width, config.height),
    )
    .with_renderer(RulerRenderer::new(style))
    .with_frame_limiter(config.frame_limiter())
    .with_device_pixel_ratio(config.device_pixel_ratio);

    let input = LocusInputWidget::new();
    input.connect(ruler.engine_mut());
    input.set_text(config.locus.as_str());

    let mut now = Duration::ZERO;
    ruler
        .submit(&input, now)
        .with_context(|| format!("cannot show locus {:?}", config.locus))?;

    let y = config.height * 0.5;
    for step in &cli.wheel {
        for _ in 0..step.count {
            now += EVENT_INTERVAL;
            ruler.wheel(step.x, step.delta_y, now);
        }
    }
    for step in &cli.drag {
        now += EVENT_INTERVAL;
        ruler.pointer(
            PointerInput::Down {
                pos: Point::new(step.from, y),
            },
            now,
        );
        now += EVENT_INTERVAL;
        ruler.pointer(
            PointerInput::Move {
                pos: Point::new(step.to, y),
            },
            now,
        );
        ruler.pointer(PointerInput::Up, now);
    }
    now += EVENT_INTERVAL;
    ruler.flush(now);

    log::info!("locus: {}", input.text());

    let (width, height) = ruler.backing_size();
    let svg = ruler.surface().to_svg(width, height);
    match &cli.out {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(svg.as_bytes())
            .context("failed to write SVG to stdout")?,
    }
    Ok(())
}
