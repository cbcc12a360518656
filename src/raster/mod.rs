//! Rasterization pipeline: offscreen rendering and encoding of strokes.
//!
//! The pipeline takes a snapshot of one or more styled lines, computes the
//! tight content bounding box, paints the strokes into an offscreen surface
//! and encodes the result as PNG bytes. Degenerate input ("nothing to draw")
//! always yields the [`ImageStream::empty`] sentinel, never an error; real
//! failures travel as [`RasterError`].

pub mod backend;
pub mod manager;
pub mod pipeline;
pub mod surface;
pub mod types;

#[cfg(test)]
mod tests;

pub use backend::{CairoBackend, RasterBackend};
pub use manager::RasterManager;
pub use pipeline::{render_lines, render_points};
pub use surface::RasterContext;
pub use types::{ImageSize, ImageStream, RasterError, RasterJob, RasterOutcome, RasterStatus};
