//! Explicit raster context: surface allocation and image encoding.

use cairo::{Antialias, Context, Format, ImageSurface};

use super::types::RasterError;

/// Graphics context handed to the pipeline by the caller.
///
/// Replaces a process-global shared device: whoever drives the pipeline owns
/// the context and its policy (antialiasing), which keeps rendering testable
/// and its lifetime explicit.
#[derive(Debug, Clone, Copy)]
pub struct RasterContext {
    antialias: Antialias,
}

impl Default for RasterContext {
    fn default() -> Self {
        Self {
            antialias: Antialias::Good,
        }
    }
}

impl RasterContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the antialias mode. `Antialias::None` gives pixel-exact
    /// strokes, which the tests rely on.
    pub fn with_antialias(antialias: Antialias) -> Self {
        Self { antialias }
    }

    /// Allocates an offscreen ARGB32 surface and a drawing context for it.
    pub(crate) fn create_surface(
        &self,
        width: i32,
        height: i32,
    ) -> Result<(ImageSurface, Context), RasterError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|source| RasterError::SurfaceAllocation {
                width,
                height,
                source,
            })?;
        let ctx = Context::new(&surface)?;
        ctx.set_antialias(self.antialias);
        Ok((surface, ctx))
    }

    /// Encodes the finished surface as PNG bytes.
    ///
    /// PNG is the output format of this pipeline: cairo encodes it natively,
    /// it is lossless, and a fixed encoder makes repeated renders
    /// byte-identical.
    pub(crate) fn encode(&self, surface: &ImageSurface) -> Result<Vec<u8>, RasterError> {
        let mut bytes = Vec::new();
        surface
            .write_to_png(&mut bytes)
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}
