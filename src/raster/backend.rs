//! Rendering backend abstraction for background rasterization.

use async_trait::async_trait;
use tokio::task;

use super::pipeline;
use super::surface::RasterContext;
use super::types::{ImageStream, RasterError, RasterJob};

/// Abstraction over how a raster job turns into encoded image bytes.
///
/// The manager talks to a backend instead of the pipeline directly so tests
/// can substitute a mock.
#[async_trait]
pub trait RasterBackend: Send + Sync {
    async fn render(&self, job: RasterJob) -> Result<ImageStream, RasterError>;
}

/// Default backend: the cairo pipeline, run on the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct CairoBackend {
    context: RasterContext,
}

impl CairoBackend {
    pub fn new(context: RasterContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl RasterBackend for CairoBackend {
    async fn render(&self, job: RasterJob) -> Result<ImageStream, RasterError> {
        let context = self.context;
        task::spawn_blocking(move || match job {
            RasterJob::Points {
                points,
                image_size,
                line_width,
                stroke_color,
                background,
            } => pipeline::render_points(
                &context,
                &points,
                image_size,
                line_width,
                stroke_color,
                background,
            ),
            RasterJob::Lines {
                lines,
                image_size,
                background,
            } => pipeline::render_lines(&context, &lines, image_size, background),
        })
        .await
        .map_err(|e| RasterError::Task(e.to_string()))?
    }
}
