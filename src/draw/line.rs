//! Drawing line (stroke) definition.

use super::color::{BLACK, Color};
use super::point::Point;
use serde::{Deserialize, Serialize};

/// Smallest accepted smoothing granularity.
///
/// Values below this produce visibly segmented curves, so the setter clamps
/// up to it.
pub const MIN_GRANULARITY: usize = 5;

/// Default smoothing granularity (interpolated points per segment).
pub const DEFAULT_GRANULARITY: usize = 5;

/// Default stroke thickness in logical units.
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

/// One continuous pointer gesture: an ordered point sequence plus styling.
///
/// Point order is temporal (drawing order) and semantically required;
/// reordering corrupts the visual stroke. A line with fewer than two points
/// has no visible geometry. Once handed to the rasterizer the line is only
/// read, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingLine {
    /// Points traced by the pointer, in drawing order
    pub points: Vec<Point>,
    /// Stroke color
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    /// Stroke thickness in logical units
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Whether consecutive points are interpolated into a smooth curve
    #[serde(default)]
    pub enable_smoothed_path: bool,
    /// Interpolated points per segment; meaningful only when smoothing is on
    #[serde(default = "default_granularity", deserialize_with = "clamped_granularity")]
    pub granularity: usize,
}

fn default_line_color() -> Color {
    BLACK
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_granularity() -> usize {
    DEFAULT_GRANULARITY
}

fn clamped_granularity<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    Ok(value.max(MIN_GRANULARITY))
}

impl Default for DrawingLine {
    fn default() -> Self {
        Self::new(BLACK, DEFAULT_LINE_WIDTH)
    }
}

impl DrawingLine {
    /// Creates an empty line with the given style and straight segments.
    pub fn new(line_color: Color, line_width: f64) -> Self {
        Self {
            points: Vec::new(),
            line_color,
            line_width,
            enable_smoothed_path: false,
            granularity: DEFAULT_GRANULARITY,
        }
    }

    /// Replaces the point sequence, keeping the style.
    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    /// Enables smoothing with the given granularity (clamped to
    /// [`MIN_GRANULARITY`]).
    pub fn with_smoothing(mut self, granularity: usize) -> Self {
        self.enable_smoothed_path = true;
        self.granularity = granularity.max(MIN_GRANULARITY);
        self
    }

    /// Sets the smoothing granularity, clamped to [`MIN_GRANULARITY`].
    pub fn set_granularity(&mut self, granularity: usize) {
        self.granularity = granularity.max(MIN_GRANULARITY);
    }

    /// True when the line carries enough points to produce visible geometry.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}
