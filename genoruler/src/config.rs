// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for a ruler.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! width = 800.0
//! height = 60.0
//! device_pixel_ratio = 1.0
//! locus = "chr7:30,000,000-40,000,000"
//! zoom_step = 0.008
//! zoom_floor = "min_span"       # or "unbounded"
//! tick_ladder = "power_of_ten"  # or "one_two_five"
//! min_frame_interval_ms = 16
//!
//! [style]
//! background = "#f5f5f5"
//! foreground = "#333"
//! font_family = "sans-serif"
//! ```

use core::fmt;
use core::time::Duration;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use genoruler_locus::ChromosomeCatalog;
use genoruler_render::{DEFAULT_MIN_FRAME_INTERVAL, FrameLimiter, RulerStyle};
use genoruler_view::{DEFAULT_ZOOM_STEP, TickLadder, ViewportEngine, ZoomFloor};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "genoruler.toml";

/// Ruler settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulerConfig {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
    /// Device pixels per CSS pixel.
    pub device_pixel_ratio: f64,
    /// Locus shown at startup, in locus text form.
    pub locus: String,
    /// Fraction one wheel step zooms by.
    pub zoom_step: f64,
    /// Whether zooming in stops at the minimum span.
    pub zoom_floor: ZoomFloor,
    /// Tick spacing ladder.
    pub tick_ladder: TickLadder,
    /// Minimum time between drawn frames, in milliseconds.
    pub min_frame_interval_ms: u64,
    /// Visual style.
    pub style: StyleConfig,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 60.0,
            device_pixel_ratio: 1.0,
            locus: "chr7:30,000,000-40,000,000".into(),
            zoom_step: DEFAULT_ZOOM_STEP,
            zoom_floor: ZoomFloor::default(),
            tick_ladder: TickLadder::default(),
            min_frame_interval_ms: u64::try_from(DEFAULT_MIN_FRAME_INTERVAL.as_millis())
                .unwrap_or(16),
            style: StyleConfig::default(),
        }
    }
}

/// Serializable form of [`RulerStyle`]; colors are CSS color strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background fill.
    pub background: String,
    /// Tick and label color.
    pub foreground: String,
    /// Tick stroke width.
    pub tick_width: f64,
    /// Height of minor ticks.
    pub minor_tick_height: f64,
    /// Height of major ticks.
    pub major_tick_height: f64,
    /// Y coordinate of the label baseline.
    pub label_baseline: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label font family.
    pub font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = RulerStyle::default();
        Self {
            background: "#f5f5f5".into(),
            foreground: "#333333".into(),
            tick_width: style.tick_width,
            minor_tick_height: style.minor_tick_height,
            major_tick_height: style.major_tick_height,
            label_baseline: style.label_baseline,
            font_size: style.font_size,
            font_family: style.font_family,
        }
    }
}

impl StyleConfig {
    /// Resolves the color strings into a [`RulerStyle`].
    pub fn to_style(&self) -> Result<RulerStyle, ConfigError> {
        Ok(RulerStyle {
            background: color_field("style.background", &self.background)?,
            foreground: color_field("style.foreground", &self.foreground)?,
            tick_width: self.tick_width,
            minor_tick_height: self.minor_tick_height,
            major_tick_height: self.major_tick_height,
            label_baseline: self.label_baseline,
            font_size: self.font_size,
            font_family: self.font_family.clone(),
        })
    }
}

fn color_field(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|err| ConfigError::InvalidColor {
            field,
            value: value.into(),
            reason: err.to_string(),
        })
}

/// Semantic problems in an otherwise well-formed config.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A color string could not be parsed.
    InvalidColor {
        /// Dotted field path, e.g. `style.background`.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// A numeric field is outside its valid range.
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor {
                field,
                value,
                reason,
            } => write!(f, "invalid color {value:?} for {field}: {reason}"),
            Self::OutOfRange { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl RulerConfig {
    /// Loads the config at `path`, or [`DEFAULT_CONFIG_FILE`] from the
    /// working directory if present, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("loading configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("loading configuration from {DEFAULT_CONFIG_FILE}");
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("using default configuration");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and validates a TOML config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks sizes and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("device_pixel_ratio", self.device_pixel_ratio),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        self.style.to_style().map(drop)
    }

    /// Minimum frame interval as a [`Duration`].
    #[must_use]
    pub fn min_frame_interval(&self) -> Duration {
        Duration::from_millis(self.min_frame_interval_ms)
    }

    /// Frame limiter for this config.
    #[must_use]
    pub fn frame_limiter(&self) -> FrameLimiter {
        FrameLimiter::new(self.min_frame_interval())
    }

    /// Applies zoom and tick settings to `engine`.
    pub fn configure_engine<C: ChromosomeCatalog>(&self, engine: &mut ViewportEngine<C>) {
        engine.set_zoom_step(self.zoom_step);
        engine.set_zoom_floor(self.zoom_floor);
        engine.set_tick_ladder(self.tick_ladder);
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration")
    }
}
