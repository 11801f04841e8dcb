/// Straight-alpha sRGB color, 8 bits per channel.
///
/// Surfaces blend with the classic source-over operator; nothing in the
/// pipeline is premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Border shade factor, as a ratio so the floor is exact: 0.9 = 9 / 10.
const SHADE_NUM: u32 = 9;
const SHADE_DEN: u32 = 10;

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
    pub const DARK_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decodes a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Encodes as packed `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Darker, fully opaque variant: each of r/g/b becomes `floor(0.9 * c)`.
    ///
    /// Used as the border color when none was chosen explicitly.
    #[inline]
    pub const fn darker_shade(self) -> Self {
        Self::rgb(
            (self.r as u32 * SHADE_NUM / SHADE_DEN) as u8,
            (self.g as u32 * SHADE_NUM / SHADE_DEN) as u8,
            (self.b as u32 * SHADE_NUM / SHADE_DEN) as u8,
        )
    }

    /// Multiplies alpha by an 8-bit coverage value (glyph or edge coverage).
    #[inline]
    pub const fn with_coverage(self, coverage: u8) -> Self {
        self.with_alpha(((self.a as u32 * coverage as u32 + 127) / 255) as u8)
    }

    /// Source-over composite of `self` on top of `dst`.
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = self.a as u32;
        let da = dst.a as u32 * (255 - sa) / 255;
        let out_a = sa + da;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }

        let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da + out_a / 2) / out_a) as u8;
        Color::rgba(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b), out_a as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── darker_shade ──────────────────────────────────────────────────────

    #[test]
    fn darker_shade_floors_each_channel() {
        assert_eq!(Color::rgb(200, 100, 50).darker_shade(), Color::rgb(180, 90, 45));
    }

    #[test]
    fn darker_shade_is_opaque_even_for_translucent_input() {
        let c = Color::rgba(255, 11, 0, 40).darker_shade();
        // 229.5 -> 229, 9.9 -> 9
        assert_eq!(c, Color::rgb(229, 9, 0));
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn argb_roundtrip_of_known_value() {
        let c = Color::from_argb(0xFFF5_8559);
        assert_eq!(c, Color::rgb(0xF5, 0x85, 0x59));
        assert_eq!(c.to_argb(), 0xFFF5_8559);
    }

    // ── over ──────────────────────────────────────────────────────────────

    #[test]
    fn opaque_source_replaces() {
        assert_eq!(Color::RED.over(Color::BLUE), Color::RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn half_alpha_over_opaque_mixes() {
        let out = Color::rgba(255, 0, 0, 128).over(Color::rgb(0, 0, 255));
        assert_eq!(out.a, 255);
        assert!((out.r as i32 - 128).abs() <= 1);
        assert!((out.b as i32 - 127).abs() <= 1);
    }

    #[test]
    fn over_transparent_destination_keeps_source_color() {
        let src = Color::rgba(10, 20, 30, 100);
        assert_eq!(src.over(Color::TRANSPARENT), src);
    }

    #[test]
    fn coverage_scales_alpha() {
        assert_eq!(Color::WHITE.with_coverage(0).a, 0);
        assert_eq!(Color::WHITE.with_coverage(255).a, 255);
        assert_eq!(Color::WHITE.with_alpha(128).with_coverage(128).a, 64);
    }
}
