//! Paint model shared between badges and surfaces.
//!
//! Scope:
//! - color representation (straight alpha, 8 bits per channel)
//! - color filters and per-call text paint
//! - decoded bitmap handles
//!
//! Geometry types remain in `coords`.

mod bitmap;
mod color;
mod filter;
mod text;

pub use bitmap::{Bitmap, BitmapError};
pub use color::Color;
pub use filter::ColorFilter;
pub use text::TextPaint;

/// How a drawable composites over what is beneath it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Opacity {
    /// Every pixel written is fully opaque.
    Opaque,
    /// Some pixels may be partially transparent.
    Translucent,
    /// Nothing is drawn.
    Transparent,
}
