//! Freehand ink capture model and offscreen rasterizer.
//!
//! Exposes the stroke data model ([`draw`]), the rasterization pipeline that
//! turns stroke collections into encoded image bytes ([`raster`]), and the
//! view-binding layer that keeps a native stroke surface mirrored to a
//! higher-level line collection ([`view`]).

pub mod config;
pub mod draw;
pub mod raster;
pub mod view;

pub use config::Config;
