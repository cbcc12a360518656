//! Data types for the rasterization pipeline.

use crate::draw::{Color, DrawingLine, Point};
use thiserror::Error;

/// Desired logical output size requested by a caller.
///
/// Carried through the pipeline for API parity with hosting views; output
/// dimensions are nevertheless sized to the content extent (see
/// [`render_lines`](crate::raster::render_lines)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Encoded image bytes, or the uniform "nothing to render" sentinel.
///
/// Empty input, a degenerate bounding box, and a points-only render with
/// fewer than two points all produce the same empty stream, keeping the
/// rasterization entry points total. A non-empty stream holds a complete
/// encoded image positioned at its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStream {
    bytes: Vec<u8>,
}

impl ImageStream {
    /// The sentinel for degenerate input.
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// True for the "nothing to render" sentinel.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Errors that can occur while rasterizing strokes.
///
/// Degenerate input is not represented here; it yields the empty stream.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to allocate {width}x{height} raster surface: {source}")]
    SurfaceAllocation {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("cairo drawing failed: {0}")]
    Draw(#[from] cairo::Error),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("render task failed: {0}")]
    Task(String),

    #[error("raster manager is not running")]
    ManagerStopped,
}

/// One rasterization request, carrying an owned snapshot of the stroke data.
///
/// Owning the data is what makes background rendering safe: the capture path
/// can keep mutating its live collection while the job runs.
#[derive(Debug, Clone)]
pub enum RasterJob {
    /// A single unstyled stroke.
    Points {
        points: Vec<Point>,
        image_size: ImageSize,
        line_width: f64,
        stroke_color: Color,
        background: Color,
    },
    /// Independently styled strokes composited in input order.
    Lines {
        lines: Vec<DrawingLine>,
        image_size: ImageSize,
        background: Color,
    },
}

/// Result of a finished raster job.
#[derive(Debug, Clone)]
pub enum RasterOutcome {
    Success(ImageStream),
    Failed(String),
}

/// Status of the most recent raster job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterStatus {
    /// No job submitted yet, or status was reset.
    Idle,
    /// A job is being rendered.
    InProgress,
    /// The last job finished successfully.
    Success,
    /// The last job failed.
    Failed(String),
}
