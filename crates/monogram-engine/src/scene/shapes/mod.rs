//! Badge outline geometry.
//!
//! Fill and stroke both go through [`ShapeKind::covers`], so a border always
//! follows the same outline (and corner radius) as the fill beneath it.

mod oval;
mod rect;
mod rounded_rect;

use crate::coords::{Rect, Vec2};

/// Outline of a badge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    /// Ellipse inscribed in the bounds (a circle for square bounds).
    Oval,
    /// Rectangle with the same corner radius on all four corners.
    RoundedRectangle { radius: f32 },
}

/// Float edges of a rectangle after growing it by some amount.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    fn grown(rect: Rect, grow: f32) -> Self {
        Self {
            left: rect.x as f32 - grow,
            top: rect.y as f32 - grow,
            right: rect.right() as f32 + grow,
            bottom: rect.bottom() as f32 + grow,
        }
    }

    #[inline]
    fn contains(self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    #[inline]
    fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    fn height(self) -> f32 {
        self.bottom - self.top
    }
}

impl ShapeKind {
    /// Returns true if `p` lies inside this shape laid out in `rect` grown by
    /// `grow` pixels on every side (negative shrinks).
    ///
    /// Growing a rounded rectangle grows its radius by the same amount, which
    /// keeps a stroke's inner and outer outlines concentric.
    pub fn covers(self, rect: Rect, grow: f32, p: Vec2) -> bool {
        let edges = Edges::grown(rect.normalized(), grow);
        if edges.width() <= 0.0 || edges.height() <= 0.0 {
            return false;
        }
        match self {
            ShapeKind::Rectangle => rect::covers(edges, p),
            ShapeKind::Oval => oval::covers(edges, p),
            ShapeKind::RoundedRectangle { radius } => rounded_rect::covers(edges, radius + grow, p),
        }
    }

    /// Corner radius, zero for shapes without one.
    #[inline]
    pub fn corner_radius(self) -> f32 {
        match self {
            ShapeKind::RoundedRectangle { radius } => radius,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> Vec2 {
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
    }

    const BOX: Rect = Rect::new(0, 0, 20, 20);

    // ── rectangle ─────────────────────────────────────────────────────────

    #[test]
    fn rectangle_covers_corners_but_not_outside() {
        assert!(ShapeKind::Rectangle.covers(BOX, 0.0, px(0, 0)));
        assert!(ShapeKind::Rectangle.covers(BOX, 0.0, px(19, 19)));
        assert!(!ShapeKind::Rectangle.covers(BOX, 0.0, px(20, 5)));
        assert!(!ShapeKind::Rectangle.covers(BOX, 0.0, px(-1, 5)));
    }

    // ── oval ──────────────────────────────────────────────────────────────

    #[test]
    fn oval_skips_corners() {
        assert!(!ShapeKind::Oval.covers(BOX, 0.0, px(0, 0)));
        assert!(!ShapeKind::Oval.covers(BOX, 0.0, px(19, 19)));
        assert!(ShapeKind::Oval.covers(BOX, 0.0, px(10, 10)));
        assert!(ShapeKind::Oval.covers(BOX, 0.0, px(0, 10)));
    }

    // ── rounded rectangle ─────────────────────────────────────────────────

    #[test]
    fn rounded_rect_skips_corner_but_keeps_edges() {
        let shape = ShapeKind::RoundedRectangle { radius: 6.0 };
        assert!(!shape.covers(BOX, 0.0, px(0, 0)));
        assert!(shape.covers(BOX, 0.0, px(10, 0)));
        assert!(shape.covers(BOX, 0.0, px(0, 10)));
        assert!(shape.covers(BOX, 0.0, px(3, 3)));
    }

    #[test]
    fn zero_radius_matches_rectangle() {
        let shape = ShapeKind::RoundedRectangle { radius: 0.0 };
        for (x, y) in [(0, 0), (19, 0), (19, 19), (20, 20), (-1, 3)] {
            assert_eq!(
                shape.covers(BOX, 0.0, px(x, y)),
                ShapeKind::Rectangle.covers(BOX, 0.0, px(x, y)),
            );
        }
    }

    // ── grow ──────────────────────────────────────────────────────────────

    #[test]
    fn negative_grow_shrinks() {
        assert!(ShapeKind::Rectangle.covers(BOX, 0.0, px(1, 1)));
        assert!(!ShapeKind::Rectangle.covers(BOX, -2.0, px(1, 1)));
        assert!(ShapeKind::Rectangle.covers(BOX, 2.0, px(-2, -2)));
    }

    #[test]
    fn collapsed_rect_covers_nothing() {
        assert!(!ShapeKind::Oval.covers(Rect::new(0, 0, 4, 4), -2.0, px(2, 2)));
    }

    #[test]
    fn corner_radius_only_for_rounded() {
        assert_eq!(ShapeKind::Oval.corner_radius(), 0.0);
        assert_eq!(ShapeKind::RoundedRectangle { radius: 8.0 }.corner_radius(), 8.0);
    }
}
