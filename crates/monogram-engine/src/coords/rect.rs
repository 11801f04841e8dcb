/// Axis-aligned rectangle in whole pixels (top-left origin, +Y down).
///
/// Draw bounds handed to a badge are integral, like the bounds a host
/// layout system assigns to a drawable. Edge arithmetic saturates at the
/// `i32` range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rectangle from its left, top, right and bottom edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrinks the rectangle by `dx` on the left and right and by `dy` on the
    /// top and bottom. Negative values grow it.
    #[inline]
    pub const fn inset(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width.saturating_sub(dx.saturating_mul(2)),
            self.height.saturating_sub(dy.saturating_mul(2)),
        )
    }

    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.width, self.height)
    }

    /// Vertical midpoint as a float, without rounding.
    #[inline]
    pub fn exact_center_y(self) -> f32 {
        self.y as f32 + self.height as f32 * 0.5
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0 { (self.right(), self.width.saturating_neg()) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0 { (self.bottom(), self.height.saturating_neg()) } else { (self.y, self.height) };
        Self::new(x, y, width, height)
    }

    /// Smallest rectangle containing both. Empty inputs are ignored.
    pub fn union(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Rect::from_ltrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.x.max(b.x);
        let y0 = a.y.max(b.y);
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::from_ltrb(x0, y0, x1, y1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        let r = Rect::new(0, 0, 40, 40).inset(2, 2);
        assert_eq!(r, Rect::from_ltrb(2, 2, 38, 38));
    }

    #[test]
    fn inset_zero_is_identity() {
        let r = Rect::new(3, 4, 10, 20);
        assert_eq!(r.inset(0, 0), r);
    }

    #[test]
    fn negative_inset_grows() {
        assert_eq!(Rect::new(5, 5, 10, 10).inset(-1, -2), Rect::new(4, 3, 12, 14));
    }

    #[test]
    fn huge_inset_saturates() {
        let r = Rect::new(0, 0, 64, 64).inset(1 << 30, 1 << 30);
        assert_eq!(r.x, 1 << 30);
        assert_eq!(r.width, 64 - i32::MAX);
        assert!(r.is_empty());

        let grown = Rect::new(0, 0, 64, 64).inset(-(1 << 30), -(1 << 30));
        assert_eq!(grown.width, i32::MAX);
        assert_eq!(grown.right(), i32::MAX - (1 << 30));
    }

    // ── exact_center_y ────────────────────────────────────────────────────

    #[test]
    fn exact_center_y_keeps_half_pixels() {
        // Ink bounds above a baseline: top -23, bottom 0.
        assert_eq!(Rect::from_ltrb(0, -23, 10, 0).exact_center_y(), -11.5);
    }

    // ── union / intersect ─────────────────────────────────────────────────

    #[test]
    fn union_ignores_empty() {
        let a = Rect::new(1, 1, 4, 4);
        assert_eq!(Rect::default().union(a), a);
        assert_eq!(a.union(Rect::default()), a);
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(6, -2, 2, 2);
        assert_eq!(a.union(b), Rect::from_ltrb(0, -2, 8, 4));
    }

    #[test]
    fn intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn normalized_negative_width() {
        let n = Rect::new(10, 0, -4, 5).normalized();
        assert_eq!(n, Rect::new(6, 0, 4, 5));
    }
}
