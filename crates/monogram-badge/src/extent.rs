/// A size that is either fixed or taken from the draw bounds.
///
/// Builders accept plain integers: any negative value means [`Extent::Auto`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Resolved at draw time from the bounds being drawn into.
    #[default]
    Auto,
    Fixed(i32),
}

impl Extent {
    #[inline]
    pub const fn from_px(px: i32) -> Self {
        if px < 0 { Extent::Auto } else { Extent::Fixed(px) }
    }

    /// The fixed value, or `auto` when unset.
    #[inline]
    pub const fn resolve(self, auto: i32) -> i32 {
        match self {
            Extent::Auto => auto,
            Extent::Fixed(px) => px,
        }
    }

    #[inline]
    pub const fn fixed(self) -> Option<i32> {
        match self {
            Extent::Auto => None,
            Extent::Fixed(px) => Some(px),
        }
    }
}

impl From<i32> for Extent {
    #[inline]
    fn from(px: i32) -> Self {
        Extent::from_px(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_means_auto() {
        assert_eq!(Extent::from_px(-1), Extent::Auto);
        assert_eq!(Extent::from(-40), Extent::Auto);
    }

    #[test]
    fn zero_is_a_fixed_size() {
        assert_eq!(Extent::from_px(0), Extent::Fixed(0));
        assert_eq!(Extent::Fixed(0).resolve(64), 0);
    }

    #[test]
    fn auto_resolves_to_fallback() {
        assert_eq!(Extent::Auto.resolve(64), 64);
        assert_eq!(Extent::Auto.fixed(), None);
        assert_eq!(Extent::Fixed(29).fixed(), Some(29));
    }
}
