//! Content bounding box computation and origin normalization.

use super::point::Point;

/// Content narrower or shorter than this (in logical units) is not worth
/// rasterizing; it also guards against zero-dimension surface allocation.
const MIN_EXTENT: f64 = 1.0;

/// Tight axis-aligned bounding box over a flattened point set.
///
/// Carries the translation that maps the content's minimum corner onto the
/// raster origin, so output image dimensions equal the content extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBounds {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl ContentBounds {
    /// Computes the bounding box of all points.
    ///
    /// Returns `None` when there is nothing worth rasterizing: an empty point
    /// set, or content whose extent is below one logical unit on either axis
    /// (a single point, or a perfectly horizontal/vertical stroke). Callers
    /// treat `None` as a no-op, not an error.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for p in iter {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let width = max_x - min_x;
        let height = max_y - min_y;
        if width < MIN_EXTENT || height < MIN_EXTENT {
            return None;
        }

        Some(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Translation applied to every point so the minimum corner maps to the
    /// raster origin.
    pub fn offset(&self) -> (f64, f64) {
        (-self.min_x, -self.min_y)
    }

    /// Raster dimensions covering the content: `(ceil(width), ceil(height))`,
    /// each at least 1.
    pub fn raster_size(&self) -> (i32, i32) {
        let w = (self.width.ceil() as i32).max(1);
        let h = (self.height.ceil() as i32).max(1);
        (w, h)
    }

    /// Content extent in logical units.
    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bounds() {
        assert!(ContentBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn single_point_has_no_bounds() {
        assert!(ContentBounds::from_points([Point::new(5.0, 5.0)]).is_none());
    }

    #[test]
    fn flat_strokes_have_no_bounds() {
        // Horizontal: no vertical extent
        let horizontal = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert!(ContentBounds::from_points(horizontal).is_none());

        // Vertical: no horizontal extent
        let vertical = [Point::new(3.0, 0.0), Point::new(3.0, 10.0)];
        assert!(ContentBounds::from_points(vertical).is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            Point::new(4.0, 10.0),
            Point::new(-2.0, 3.0),
            Point::new(7.5, 6.0),
        ];
        let bounds = ContentBounds::from_points(points).unwrap();
        assert_eq!(bounds.offset(), (2.0, -3.0));
        assert_eq!(bounds.extent(), (9.5, 7.0));
        assert_eq!(bounds.raster_size(), (10, 7));
    }

    #[test]
    fn raster_size_rounds_up_fractional_extents() {
        let points = [Point::new(0.0, 0.0), Point::new(10.2, 1.1)];
        let bounds = ContentBounds::from_points(points).unwrap();
        assert_eq!(bounds.raster_size(), (11, 2));
    }
}
