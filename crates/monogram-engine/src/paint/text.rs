use crate::text::FontId;

use super::{Color, ColorFilter};

/// Style used to measure and draw a single run of text.
///
/// Built fresh for every draw call, so two threads drawing the same badge
/// never share paint state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextPaint {
    /// Font size in pixels.
    pub size: f32,
    /// Synthetic bold (glyphs smeared by one pixel).
    pub bold: bool,
    /// `None` resolves to the surface's default typeface.
    pub font: Option<FontId>,
    pub color: Color,
    pub color_filter: Option<ColorFilter>,
}

impl TextPaint {
    #[inline]
    pub fn new(size: f32, color: Color) -> Self {
        Self { size, bold: false, font: None, color, color_filter: None }
    }

    /// Color after the filter (if any) is applied.
    #[inline]
    pub fn effective_color(&self) -> Color {
        match self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        }
    }
}
