use std::fmt;

use crate::coords::Rect;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// The first font loaded is the default typeface: text painted without an
/// explicit [`FontId`] uses it.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    #[inline]
    pub fn default_font(&self) -> Option<FontId> {
        (!self.fonts.is_empty()).then_some(FontId(0))
    }

    /// Resolves `id`, falling back to the default typeface.
    pub(crate) fn resolve(&self, id: Option<FontId>) -> Option<&fontdue::Font> {
        id.and_then(|id| self.fonts.get(id.0)).or_else(|| self.fonts.first())
    }

    /// Tight ink bounds of `text` laid out on one line with its baseline
    /// origin at `(0, 0)`; y grows downward, so ascenders are negative.
    ///
    /// Returns an empty rect when no font is available or nothing has ink.
    #[must_use]
    pub fn ink_bounds(&self, text: &str, id: Option<FontId>, size: f32) -> Rect {
        let Some(font) = self.resolve(id) else {
            return Rect::default();
        };

        let mut pen = 0.0f32;
        let mut ink = Rect::default();
        for ch in text.chars() {
            let m = font.metrics(ch, size);
            if m.width > 0 && m.height > 0 {
                let left = (pen + m.xmin as f32).floor() as i32;
                let glyph = Rect::from_ltrb(
                    left,
                    -(m.ymin + m.height as i32),
                    left + m.width as i32,
                    -m.ymin,
                );
                ink = ink.union(glyph);
            }
            pen += m.advance_width;
        }
        ink
    }

    /// Sum of glyph advances: the width the text occupies on its line.
    #[must_use]
    pub fn advance_width(&self, text: &str, id: Option<FontId>, size: f32) -> f32 {
        self.resolve(id)
            .map(|font| text.chars().map(|ch| font.metrics(ch, size).advance_width).sum())
            .unwrap_or(0.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSystem").field("fonts", &self.fonts.len()).finish()
    }
}
