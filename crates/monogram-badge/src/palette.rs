//! Stable badge colors picked from a fixed palette.

use std::borrow::Cow;

use monogram_engine::paint::Color;

const DEFAULT_COLORS: [Color; 9] = [
    Color::from_argb(0xFFF1_6364),
    Color::from_argb(0xFFF5_8559),
    Color::from_argb(0xFFF9_A43E),
    Color::from_argb(0xFFE4_C62E),
    Color::from_argb(0xFF67_BF74),
    Color::from_argb(0xFF59_A2BE),
    Color::from_argb(0xFF20_93CD),
    Color::from_argb(0xFFAD_62A7),
    Color::from_argb(0xFF80_5781),
];

const MATERIAL_COLORS: [Color; 17] = [
    Color::from_argb(0xFFE5_7373),
    Color::from_argb(0xFFF0_6292),
    Color::from_argb(0xFFBA_68C8),
    Color::from_argb(0xFF95_75CD),
    Color::from_argb(0xFF79_86CB),
    Color::from_argb(0xFF64_B5F6),
    Color::from_argb(0xFF4F_C3F7),
    Color::from_argb(0xFF4D_D0E1),
    Color::from_argb(0xFF4D_B6AC),
    Color::from_argb(0xFF81_C784),
    Color::from_argb(0xFFAE_D581),
    Color::from_argb(0xFFFF_8A65),
    Color::from_argb(0xFFD4_E157),
    Color::from_argb(0xFFFF_D54F),
    Color::from_argb(0xFFFF_B74D),
    Color::from_argb(0xFFA1_887F),
    Color::from_argb(0xFF90_A4AE),
];

/// Maps keys (names, initials, ids) to palette colors.
///
/// The choice depends only on the key, so "Alice" gets the same color on
/// every run and every platform.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGenerator {
    colors: Cow<'static, [Color]>,
}

impl ColorGenerator {
    pub const DEFAULT: ColorGenerator = ColorGenerator { colors: Cow::Borrowed(&DEFAULT_COLORS) };
    pub const MATERIAL: ColorGenerator = ColorGenerator { colors: Cow::Borrowed(&MATERIAL_COLORS) };

    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self { colors: Cow::Owned(colors.into()) }
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for `key`. An empty palette yields [`Color::GRAY`].
    pub fn color_for(&self, key: &str) -> Color {
        if self.colors.is_empty() {
            return Color::GRAY;
        }
        let index = string_hash(key).unsigned_abs() as usize % self.colors.len();
        self.colors[index]
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `h = 31 * h + unit` over UTF-16 code units with wrapping `i32` math, the
/// hash most avatar palettes key on.
fn string_hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}
