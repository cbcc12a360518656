//! View-binding layer: keeps a native stroke surface mirrored to a
//! higher-level line collection and forwards completed strokes upward.

pub mod binding;
pub mod reconcile;

pub use binding::{DrawingViewBinding, InkSurface, StrokeCompleted};
pub use reconcile::{ViewError, reconcile};
