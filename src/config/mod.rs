//! Configuration file support for inkboard.
//!
//! Loads user settings from `~/.config/inkboard/config.toml`: drawing
//! defaults for newly captured strokes and rasterizer output settings. If no
//! config file exists, sensible defaults are used automatically.

use anyhow::{Context as _, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::{self, Color, DrawingLine, line::MIN_GRANULARITY};

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and use those when not specified in the file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
/// default_granularity = 5
/// smoothed = false
///
/// [raster]
/// background = "white"
/// antialias = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Defaults applied to newly captured strokes
    #[serde(default)]
    pub drawing: DrawingDefaults,

    /// Rasterizer output settings
    #[serde(default)]
    pub raster: RasterConfig,
}

/// Style applied to strokes that do not specify their own.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingDefaults {
    /// Named stroke color ("red", "green", "blue", "yellow", "orange",
    /// "pink", "white", "black")
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Stroke thickness in logical units
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Smoothing granularity for smoothed strokes
    #[serde(default = "default_granularity")]
    pub default_granularity: usize,

    /// Whether new strokes use smoothed paths
    #[serde(default)]
    pub smoothed: bool,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_granularity: default_granularity(),
            smoothed: false,
        }
    }
}

/// Rasterizer output settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Named background color filled behind the strokes
    #[serde(default = "default_background")]
    pub background: String,

    /// Whether strokes are antialiased
    #[serde(default = "default_true")]
    pub antialias: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            antialias: true,
        }
    }
}

fn default_color() -> String {
    "black".to_string()
}

fn default_width() -> f64 {
    draw::line::DEFAULT_LINE_WIDTH
}

fn default_granularity() -> usize {
    draw::line::DEFAULT_GRANULARITY
}

fn default_background() -> String {
    "white".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("could not resolve config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location (`~/.config/inkboard/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkboard").join("config.toml"))
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged; unknown color names fall back to the defaults.
    ///
    /// Validated ranges:
    /// - `default_width`: 0.5 - 40.0
    /// - `default_granularity`: 5 - 100
    fn validate_and_clamp(&mut self) {
        if !(0.5..=40.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 0.5-40.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(0.5, 40.0);
        }

        if !(MIN_GRANULARITY..=100).contains(&self.drawing.default_granularity) {
            log::warn!(
                "Invalid default_granularity {}, clamping to {}-100 range",
                self.drawing.default_granularity,
                MIN_GRANULARITY
            );
            self.drawing.default_granularity =
                self.drawing.default_granularity.clamp(MIN_GRANULARITY, 100);
        }

        if draw::color::name_to_color(&self.drawing.default_color).is_none() {
            log::warn!(
                "Unknown default_color '{}', falling back to '{}'",
                self.drawing.default_color,
                default_color()
            );
            self.drawing.default_color = default_color();
        }

        if draw::color::name_to_color(&self.raster.background).is_none() {
            log::warn!(
                "Unknown background '{}', falling back to '{}'",
                self.raster.background,
                default_background()
            );
            self.raster.background = default_background();
        }
    }

    /// The configured default stroke color.
    pub fn line_color(&self) -> Color {
        draw::color::name_to_color(&self.drawing.default_color).unwrap_or(draw::color::BLACK)
    }

    /// The configured raster background color.
    pub fn background_color(&self) -> Color {
        draw::color::name_to_color(&self.raster.background).unwrap_or(draw::color::WHITE)
    }

    /// Builds an empty line styled with the configured defaults.
    pub fn new_line(&self) -> DrawingLine {
        let line = DrawingLine::new(self.line_color(), self.drawing.default_width);
        if self.drawing.smoothed {
            line.with_smoothing(self.drawing.default_granularity)
        } else {
            line
        }
    }
}
