//! Coordinate and geometry types shared by surfaces and badges.
//!
//! Canonical space:
//! - surface pixels
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
