//! Monogram badges: letter or image avatars drawn onto any
//! [`DrawSurface`](monogram_engine::surface::DrawSurface).
//!
//! # Quick start
//!
//! ```
//! use monogram_badge::{Badge, ColorGenerator};
//! use monogram_engine::coords::Rect;
//! use monogram_engine::scene::DrawList;
//!
//! let color = ColorGenerator::MATERIAL.color_for("Ada");
//! let badge = Badge::build_round("a", color, |c| c.uppercase().border(2));
//!
//! let mut list = DrawList::new();
//! badge.draw(&mut list, Rect::new(0, 0, 48, 48));
//! assert_eq!(list.stroke_count(), 1);
//! ```
//!
//! Configuration is staged: pick a shape (or `begin_config()` first), then
//! build. See [`builder`].

mod badge;
pub mod builder;
mod content;
mod extent;
mod palette;

pub use badge::Badge;
pub use builder::{Builder, ConfigBuilder, ShapeBuilder};
pub use content::Content;
pub use extent::Extent;
pub use palette::ColorGenerator;

/// Common imports for code that builds and draws badges.
pub mod prelude {
    pub use crate::{Badge, ColorGenerator, Content, Extent};
    pub use monogram_engine::coords::Rect;
    pub use monogram_engine::paint::{Bitmap, Color, ColorFilter};
    pub use monogram_engine::scene::{DrawList, ShapeKind};
    pub use monogram_engine::surface::DrawSurface;
}
