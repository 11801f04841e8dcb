//! Drawing surface abstraction.
//!
//! A badge only ever talks to a [`DrawSurface`]. The engine ships two:
//! [`DrawList`](crate::scene::DrawList) records commands, and
//! [`Canvas`](crate::render::Canvas) rasterizes into an RGBA image.

use crate::coords::{Rect, Vec2};
use crate::paint::{Bitmap, Color, TextPaint};
use crate::scene::ShapeKind;

/// Primitive operations a badge needs from its host.
///
/// Geometry arguments are in the surface's current coordinate space, i.e.
/// relative to whatever [`translate`](Self::translate) calls are in effect.
pub trait DrawSurface {
    /// Fills `shape` laid out in `rect`.
    fn fill_shape(&mut self, shape: ShapeKind, rect: Rect, color: Color);

    /// Strokes the outline of `shape` laid out in `rect`. The stroke is
    /// centered on the outline, `width / 2` on each side.
    fn stroke_shape(&mut self, shape: ShapeKind, rect: Rect, width: f32, color: Color);

    /// Tight ink bounds of `text` drawn with its baseline origin at `(0, 0)`.
    /// Glyphs above the baseline have negative `y`.
    fn measure_text(&self, text: &str, paint: &TextPaint) -> Rect;

    /// Draws `text` horizontally centered on `anchor.x` with its baseline at
    /// `anchor.y`.
    fn draw_text(&mut self, text: &str, anchor: Vec2, paint: &TextPaint);

    /// Copies `bitmap` unscaled with its top-left corner at `(x, y)`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32);

    /// Moves the origin of subsequent drawing.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Saves the current transform. Returns the count to hand back to
    /// [`restore_to_count`](Self::restore_to_count).
    fn save(&mut self) -> usize;

    /// Pops saved transforms until `count` remain.
    fn restore_to_count(&mut self, count: usize);
}

/// Translation plus its save stack; shared bookkeeping for surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStack {
    offset: (i32, i32),
    saved: Vec<(i32, i32)>,
}

impl TransformStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current origin offset in absolute surface pixels.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    #[inline]
    pub fn save(&mut self) -> usize {
        let count = self.saved.len();
        self.saved.push(self.offset);
        count
    }

    pub fn restore_to_count(&mut self, count: usize) {
        while self.saved.len() > count {
            if let Some(offset) = self.saved.pop() {
                self.offset = offset;
            }
        }
    }

    /// Maps a rect from current to absolute coordinates.
    #[inline]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        rect.translated(self.offset.0, self.offset.1)
    }

    #[inline]
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        p.offset(self.offset.0, self.offset.1)
    }
}
