//! Offscreen rendering of stroke collections to encoded image streams.

use cairo::ImageSurface;

use crate::draw::{self, Color, ContentBounds, DrawingLine, Point};

use super::surface::RasterContext;
use super::types::{ImageSize, ImageStream, RasterError};

/// Renders a single unstyled stroke to an encoded image stream.
///
/// The points are treated as one straight-segment line of the given width
/// and color over `background`. Fewer than two points is "nothing to render"
/// and returns [`ImageStream::empty`] before any surface is allocated.
///
/// `image_size` does not influence the output dimensions; the image is sized
/// exactly to the content extent (see [`render_lines`]).
pub fn render_points(
    ctx: &RasterContext,
    points: &[Point],
    image_size: ImageSize,
    line_width: f64,
    stroke_color: Color,
    background: Color,
) -> Result<ImageStream, RasterError> {
    if points.len() < 2 {
        log::debug!("skipping rasterization: {} point(s)", points.len());
        return Ok(ImageStream::empty());
    }

    let line = DrawingLine::new(stroke_color, line_width).with_points(points.to_vec());
    render_lines(ctx, std::slice::from_ref(&line), image_size, background)
}

/// Renders a set of independently styled strokes to an encoded image stream.
///
/// Lines are painted in input order, so later lines cover earlier ones where
/// they overlap. An empty flattened point set, or content with less than one
/// logical unit of extent on either axis, returns [`ImageStream::empty`].
///
/// `image_size` is accepted for parity with hosting views but does not
/// influence sizing: the output is always `(ceil(width), ceil(height))` of
/// the content bounding box, with the content translated to the origin.
pub fn render_lines(
    ctx: &RasterContext,
    lines: &[DrawingLine],
    image_size: ImageSize,
    background: Color,
) -> Result<ImageStream, RasterError> {
    log::trace!("requested image size {image_size:?}; output is sized to content");

    let Some(surface) = raster_to_surface(ctx, lines, background)? else {
        return Ok(ImageStream::empty());
    };

    let bytes = ctx.encode(&surface)?;
    log::debug!(
        "rasterized {} line(s) into {}x{} image ({} bytes)",
        lines.len(),
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(ImageStream::from_bytes(bytes))
}

/// Paints all lines into a freshly allocated surface sized to the content.
///
/// Returns `Ok(None)` when the flattened point set has no drawable extent.
pub(crate) fn raster_to_surface(
    ctx: &RasterContext,
    lines: &[DrawingLine],
    background: Color,
) -> Result<Option<ImageSurface>, RasterError> {
    let all_points = lines.iter().flat_map(|line| line.points.iter().copied());
    let Some(bounds) = ContentBounds::from_points(all_points) else {
        log::debug!("skipping rasterization: no drawable content");
        return Ok(None);
    };

    let (width, height) = bounds.raster_size();
    let offset = bounds.offset();

    let (surface, cr) = ctx.create_surface(width, height)?;
    draw::fill_background(&cr, background)?;
    for line in lines {
        draw::paint_line(&cr, line, offset)?;
    }
    drop(cr);

    Ok(Some(surface))
}
