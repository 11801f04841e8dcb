//! Monogram engine crate.
//!
//! Owns everything below the badge itself: geometry, paint, the
//! [`DrawSurface`](surface::DrawSurface) seam, and the surfaces shipped with
//! the workspace (a recorder and a CPU rasterizer).

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod surface;
pub mod text;
