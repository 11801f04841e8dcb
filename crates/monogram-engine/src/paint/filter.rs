use super::Color;

/// Color transform applied to a paint's color right before it is used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorFilter {
    /// Replaces r/g/b with the tint and multiplies alpha by the tint's alpha
    /// (source-in).
    Tint(Color),
    /// Per-channel `c * mul / 255 + add`, saturating. Alpha is untouched.
    Lighting { mul: Color, add: Color },
}

impl ColorFilter {
    pub fn apply(self, color: Color) -> Color {
        match self {
            ColorFilter::Tint(tint) => Color::rgba(
                tint.r,
                tint.g,
                tint.b,
                ((color.a as u32 * tint.a as u32 + 127) / 255) as u8,
            ),
            ColorFilter::Lighting { mul, add } => {
                let ch = |c: u8, m: u8, a: u8| (c as u32 * m as u32 / 255 + a as u32).min(255) as u8;
                Color::rgba(
                    ch(color.r, mul.r, add.r),
                    ch(color.g, mul.g, add.g),
                    ch(color.b, mul.b, add.b),
                    color.a,
                )
            }
        }
    }
}
