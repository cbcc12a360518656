//! Cairo painting for expanded strokes.

use super::color::Color;
use super::line::DrawingLine;
use super::point::Point;
use super::smooth::expand_line;

/// Fills the whole surface with an opaque background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.paint()
}

/// Paints one styled line, translated by the normalization offset.
///
/// The line is expanded first, so smoothing takes effect here.
pub fn paint_line(
    ctx: &cairo::Context,
    line: &DrawingLine,
    offset: (f64, f64),
) -> Result<(), cairo::Error> {
    let points = expand_line(line);
    paint_polyline(ctx, &points, line.line_color, line.line_width, offset)
}

/// Paints a polyline as one stroked path with round caps and joins.
///
/// Round caps keep the joint between consecutive segments visually seamless.
/// Fewer than two points paints nothing.
pub fn paint_polyline(
    ctx: &cairo::Context,
    points: &[Point],
    color: Color,
    width: f64,
    (dx, dy): (f64, f64),
) -> Result<(), cairo::Error> {
    if points.len() < 2 {
        return Ok(());
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let first = points[0].translate(dx, dy);
    ctx.move_to(first.x, first.y);
    for p in &points[1..] {
        let p = p.translate(dx, dy);
        ctx.line_to(p.x, p.y);
    }

    ctx.stroke()
}
