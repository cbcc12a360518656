//! Stroke model and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types used for ink capture:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`]: 2-D coordinate in the input surface's logical space
//! - [`DrawingLine`]: one continuous pointer gesture with per-stroke styling
//! - [`ContentBounds`]: tight bounding box and origin normalization
//! - Stroke expansion (smoothing) and Cairo painting functions

pub mod bounds;
pub mod color;
pub mod line;
pub mod point;
pub mod render;
pub mod smooth;

// Re-export commonly used types at module level
pub use bounds::ContentBounds;
pub use color::Color;
pub use line::DrawingLine;
pub use point::Point;
pub use render::{fill_background, paint_line, paint_polyline};
pub use smooth::expand_line;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
