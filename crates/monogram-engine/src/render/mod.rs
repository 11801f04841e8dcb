//! Rasterizing surfaces.
//!
//! Convention:
//! - geometry in surface pixels (top-left origin, +Y down)
//! - pixel coverage is sampled at pixel centers
//! - blending is straight-alpha source-over

mod canvas;

pub use canvas::Canvas;
