use std::fmt;
use std::sync::Arc;

use crate::coords::{Rect, Vec2};
use crate::paint::{Bitmap, Color, TextPaint};
use crate::surface::{DrawSurface, TransformStack};

use super::{DrawCmd, ShapeKind};

/// Ink-bounds measurement used by a [`DrawList`].
pub type TextMetrics = Arc<dyn Fn(&str, &TextPaint) -> Rect + Send + Sync>;

/// Font-free ink estimate: every char advances `0.6 * size` and its ink
/// spans from the cap height (`0.7 * size` above the baseline) down to the
/// baseline.
pub fn approximate_ink_bounds(text: &str, paint: &TextPaint) -> Rect {
    let chars = text.chars().filter(|c| !c.is_whitespace()).count();
    if chars == 0 {
        return Rect::default();
    }
    let width = (paint.size * 0.6 * chars as f32).round() as i32;
    let cap = (paint.size * 0.7).round() as i32;
    Rect::from_ltrb(0, -cap, width, 0)
}

/// Recorded draw stream.
///
/// Commands are kept in call order. Clear and reuse across frames to keep
/// the allocation.
///
/// ```
/// use monogram_engine::coords::Rect;
/// use monogram_engine::paint::Color;
/// use monogram_engine::scene::{DrawCmd, DrawList, ShapeKind};
/// use monogram_engine::surface::DrawSurface;
///
/// let mut list = DrawList::new();
/// list.translate(10, 0);
/// list.fill_shape(ShapeKind::Oval, Rect::new(0, 0, 4, 4), Color::RED);
/// assert!(matches!(list.cmds()[0], DrawCmd::Fill { rect, .. } if rect.x == 10));
/// ```
pub struct DrawList {
    cmds: Vec<DrawCmd>,
    transform: TransformStack,
    metrics: TextMetrics,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::with_metrics(approximate_ink_bounds)
    }

    /// Uses `metrics` for [`DrawSurface::measure_text`].
    pub fn with_metrics(
        metrics: impl Fn(&str, &TextPaint) -> Rect + Send + Sync + 'static,
    ) -> Self {
        Self { cmds: Vec::new(), transform: TransformStack::new(), metrics: Arc::new(metrics) }
    }

    /// Clears recorded commands and the transform. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.transform = TransformStack::new();
    }

    /// Commands in call order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn into_cmds(self) -> Vec<DrawCmd> {
        self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Number of recorded strokes.
    pub fn stroke_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, DrawCmd::Stroke { .. })).count()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DrawList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawList")
            .field("cmds", &self.cmds)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl DrawSurface for DrawList {
    fn fill_shape(&mut self, shape: ShapeKind, rect: Rect, color: Color) {
        let rect = self.transform.map_rect(rect);
        self.cmds.push(DrawCmd::Fill { shape, rect, color });
    }

    fn stroke_shape(&mut self, shape: ShapeKind, rect: Rect, width: f32, color: Color) {
        let rect = self.transform.map_rect(rect);
        self.cmds.push(DrawCmd::Stroke { shape, rect, width, color });
    }

    fn measure_text(&self, text: &str, paint: &TextPaint) -> Rect {
        (self.metrics)(text, paint)
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, paint: &TextPaint) {
        let anchor = self.transform.map_point(anchor);
        self.cmds.push(DrawCmd::Text { text: text.to_owned(), anchor, paint: *paint });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let (dx, dy) = self.transform.offset();
        self.cmds.push(DrawCmd::Bitmap { bitmap: bitmap.clone(), x: x + dx, y: y + dy });
    }

    #[inline]
    fn translate(&mut self, dx: i32, dy: i32) {
        self.transform.translate(dx, dy);
    }

    #[inline]
    fn save(&mut self) -> usize {
        self.transform.save()
    }

    #[inline]
    fn restore_to_count(&mut self, count: usize) {
        self.transform.restore_to_count(count);
    }
}
