use image::{Rgba, RgbaImage};

use crate::coords::{Rect, Vec2};
use crate::paint::{Bitmap, Color, TextPaint};
use crate::scene::ShapeKind;
use crate::surface::{DrawSurface, TransformStack};
use crate::text::FontSystem;

/// CPU surface that rasterizes straight into an RGBA image.
///
/// Coverage is point-sampled at pixel centers (no anti-aliasing on shapes);
/// glyph coverage comes from fontdue. Everything is clipped to the image.
pub struct Canvas<'a> {
    image: RgbaImage,
    fonts: &'a FontSystem,
    transform: TransformStack,
}

impl<'a> Canvas<'a> {
    /// Transparent canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32, fonts: &'a FontSystem) -> Self {
        Self::from_image(RgbaImage::new(width, height), fonts)
    }

    /// Draws on top of existing pixels.
    pub fn from_image(image: RgbaImage, fonts: &'a FontSystem) -> Self {
        Self { image, fonts, transform: TransformStack::new() }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at absolute `(x, y)`; `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x as u32, y as u32).0;
        Some(Color::rgba(r, g, b, a))
    }

    /// Overwrites every pixel, ignoring the transform.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba([color.r, color.g, color.b, color.a]);
        self.image.pixels_mut().for_each(|p| *p = px);
    }

    // ── pixel plumbing ────────────────────────────────────────────────────

    /// Blends `color` over the pixel at absolute `(x, y)`. OOB is ignored.
    fn blend(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() || color.a == 0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let [r, g, b, a] = dst.0;
        let out = color.over(Color::rgba(r, g, b, a));
        *dst = Rgba([out.r, out.g, out.b, out.a]);
    }

    /// Blends `color` into every pixel of `area` (absolute) whose center
    /// satisfies `inside`.
    fn cover(&mut self, area: Rect, color: Color, inside: impl Fn(Vec2) -> bool) {
        let canvas = Rect::new(0, 0, self.width(), self.height());
        let Some(area) = area.intersect(canvas) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if inside(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

impl DrawSurface for Canvas<'_> {
    fn fill_shape(&mut self, shape: ShapeKind, rect: Rect, color: Color) {
        let rect = self.transform.map_rect(rect);
        self.cover(rect, color, |p| shape.covers(rect, 0.0, p));
    }

    fn stroke_shape(&mut self, shape: ShapeKind, rect: Rect, width: f32, color: Color) {
        if width <= 0.0 {
            return;
        }
        let rect = self.transform.map_rect(rect);
        let half = width * 0.5;
        let reach = half.ceil() as i32;
        self.cover(rect.inset(-reach, -reach), color, |p| {
            shape.covers(rect, half, p) && !shape.covers(rect, -half, p)
        });
    }

    fn measure_text(&self, text: &str, paint: &TextPaint) -> Rect {
        self.fonts.ink_bounds(text, paint.font, paint.size)
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, paint: &TextPaint) {
        let fonts = self.fonts;
        let Some(font) = fonts.resolve(paint.font) else {
            log::warn!("no font loaded, skipping text {:?}", text);
            return;
        };

        let anchor = self.transform.map_point(anchor);
        let color = paint.effective_color();
        let baseline = anchor.y.round() as i32;
        let mut pen = anchor.x - fonts.advance_width(text, paint.font, paint.size) * 0.5;

        for ch in text.chars() {
            let (m, coverage) = font.rasterize(ch, paint.size);
            let left = (pen + m.xmin as f32).round() as i32;
            let top = baseline - (m.ymin + m.height as i32);
            for row in 0..m.height {
                for col in 0..m.width {
                    let cov = coverage[row * m.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let (x, y) = (left + col as i32, top + row as i32);
                    let c = color.with_coverage(cov);
                    self.blend(x, y, c);
                    if paint.bold {
                        self.blend(x + 1, y, c);
                    }
                }
            }
            pen += m.advance_width;
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let (dx, dy) = self.transform.offset();
        let (x0, y0) = (x + dx, y + dy);
        for by in 0..bitmap.height() {
            for bx in 0..bitmap.width() {
                if let Some(c) = bitmap.pixel(bx, by) {
                    self.blend(x0 + bx, y0 + by, c);
                }
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    const DEJAVU: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/fonts/DejaVuSans.ttf"));

    fn loaded() -> FontSystem {
        let mut fonts = FontSystem::new();
        fonts.load_font(DEJAVU).unwrap();
        fonts
    }

    /// Left, top, right, bottom of everything painted.
    fn ink_extent(canvas: &Canvas<'_>) -> (i32, i32, i32, i32) {
        let px = painted(canvas);
        let left = px.iter().map(|p| p.0).min().unwrap();
        let right = px.iter().map(|p| p.0).max().unwrap() + 1;
        let top = px.iter().map(|p| p.1).min().unwrap();
        let bottom = px.iter().map(|p| p.1).max().unwrap() + 1;
        (left, top, right, bottom)
    }

    fn painted(canvas: &Canvas<'_>) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y).is_some_and(|c| c.a > 0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_stays_inside_bounds_for_every_shape() {
        let fonts = FontSystem::new();
        let bounds = Rect::new(4, 6, 12, 10);
        for shape in [
            ShapeKind::Rectangle,
            ShapeKind::Oval,
            ShapeKind::RoundedRectangle { radius: 3.0 },
        ] {
            let mut canvas = Canvas::new(24, 24, &fonts);
            canvas.fill_shape(shape, bounds, Color::BLUE);
            let px = painted(&canvas);
            assert!(!px.is_empty(), "{shape:?} painted nothing");
            assert!(
                px.iter().all(|&(x, y)| x >= 4 && x < 16 && y >= 6 && y < 16),
                "{shape:?} escaped its bounds"
            );
        }
    }

    #[test]
    fn rectangle_fill_covers_exactly_the_bounds() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(10, 10, &fonts);
        canvas.fill_shape(ShapeKind::Rectangle, Rect::new(2, 3, 4, 5), Color::RED);
        assert_eq!(painted(&canvas).len(), 20);
        assert_eq!(canvas.pixel(2, 3), Some(Color::RED));
        assert_eq!(canvas.pixel(5, 7), Some(Color::RED));
    }

    #[test]
    fn oval_leaves_corners_empty() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(16, 16, &fonts);
        canvas.fill_shape(ShapeKind::Oval, Rect::new(0, 0, 16, 16), Color::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(8, 8), Some(Color::WHITE));
    }

    #[test]
    fn fill_is_clipped_to_canvas() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(4, 4, &fonts);
        canvas.fill_shape(ShapeKind::Rectangle, Rect::new(-10, -10, 100, 100), Color::RED);
        assert_eq!(painted(&canvas).len(), 16);
    }

    // ── stroke ────────────────────────────────────────────────────────────

    #[test]
    fn stroke_leaves_interior_untouched() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(20, 20, &fonts);
        canvas.stroke_shape(ShapeKind::Rectangle, Rect::new(2, 2, 16, 16), 2.0, Color::RED);
        assert_eq!(canvas.pixel(10, 10), Some(Color::TRANSPARENT));
        // Centered on the edge: one pixel outside, one inside.
        assert_eq!(canvas.pixel(1, 10), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 10), Some(Color::RED));
        assert_eq!(canvas.pixel(3, 10), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(0, 10), Some(Color::TRANSPARENT));
    }

    #[test]
    fn zero_width_stroke_draws_nothing() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(8, 8, &fonts);
        canvas.stroke_shape(ShapeKind::Oval, Rect::new(0, 0, 8, 8), 0.0, Color::RED);
        assert!(painted(&canvas).is_empty());
    }

    // ── bitmap ────────────────────────────────────────────────────────────

    #[test]
    fn bitmap_honors_translation_and_clipping() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(6, 6, &fonts);
        let bmp = Bitmap::from_rgba(2, 2, [255u8, 0, 0, 255].repeat(4)).unwrap();

        let count = canvas.save();
        canvas.translate(3, 3);
        canvas.draw_bitmap(&bmp, 2, 2);
        canvas.restore_to_count(count);

        assert_eq!(canvas.pixel(5, 5), Some(Color::RED));
        assert_eq!(painted(&canvas), vec![(5, 5)]);
    }

    #[test]
    fn translucent_bitmap_blends() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(1, 1, &fonts);
        canvas.clear(Color::BLUE);
        let bmp = Bitmap::from_rgba(1, 1, vec![255, 0, 0, 0]).unwrap();
        canvas.draw_bitmap(&bmp, 0, 0);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLUE));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_without_fonts_is_skipped() {
        let fonts = FontSystem::new();
        let mut canvas = Canvas::new(8, 8, &fonts);
        let paint = TextPaint::new(8.0, Color::WHITE);
        assert!(canvas.measure_text("A", &paint).is_empty());
        canvas.draw_text("A", Vec2::new(4.0, 6.0), &paint);
        assert!(painted(&canvas).is_empty());
    }

    #[test]
    fn glyph_sits_on_baseline_centered_on_anchor() {
        let fonts = loaded();
        let mut canvas = Canvas::new(64, 64, &fonts);
        let paint = TextPaint::new(32.0, Color::WHITE);
        canvas.draw_text("A", Vec2::new(32.0, 48.0), &paint);

        let (left, top, right, bottom) = ink_extent(&canvas);
        assert!((bottom - 48).abs() <= 1, "baseline at {bottom}");
        assert!(top < 48 - 15);
        let center_x = (left + right) as f32 * 0.5;
        assert!((center_x - 32.0).abs() <= 1.0, "center x {center_x}");
    }

    #[test]
    fn painted_ink_matches_measured_ink() {
        let fonts = loaded();
        let mut canvas = Canvas::new(80, 80, &fonts);
        let paint = TextPaint::new(40.0, Color::WHITE);
        let ink = canvas.measure_text("g", &paint);
        canvas.draw_text("g", Vec2::new(40.0, 40.0), &paint);

        let (_, top, _, bottom) = ink_extent(&canvas);
        assert!((top - (40 + ink.y)).abs() <= 1, "top {top} vs {ink:?}");
        assert!((bottom - (40 + ink.bottom())).abs() <= 1, "bottom {bottom} vs {ink:?}");
    }

    #[test]
    fn translation_moves_text() {
        let fonts = loaded();
        let paint = TextPaint::new(20.0, Color::WHITE);

        let mut plain = Canvas::new(60, 60, &fonts);
        plain.draw_text("A", Vec2::new(20.0, 30.0), &paint);
        let mut moved = Canvas::new(60, 60, &fonts);
        moved.translate(10, 5);
        moved.draw_text("A", Vec2::new(20.0, 30.0), &paint);

        let (l0, t0, r0, b0) = ink_extent(&plain);
        assert_eq!(ink_extent(&moved), (l0 + 10, t0 + 5, r0 + 10, b0 + 5));
    }

    #[test]
    fn bold_widens_glyphs_by_one_pixel() {
        let fonts = loaded();
        let regular = TextPaint::new(24.0, Color::WHITE);
        let bold = TextPaint { bold: true, ..regular };

        let mut a = Canvas::new(48, 48, &fonts);
        a.draw_text("I", Vec2::new(24.0, 36.0), &regular);
        let mut b = Canvas::new(48, 48, &fonts);
        b.draw_text("I", Vec2::new(24.0, 36.0), &bold);

        let (l, t, r, bt) = ink_extent(&a);
        assert_eq!(ink_extent(&b), (l, t, r + 1, bt));
        assert!(painted(&b).len() > painted(&a).len());
    }

    #[test]
    fn text_uses_paint_color() {
        let fonts = loaded();
        let mut canvas = Canvas::new(48, 48, &fonts);
        canvas.draw_text("I", Vec2::new(24.0, 40.0), &TextPaint::new(40.0, Color::RED));
        let solid = painted(&canvas)
            .into_iter()
            .filter_map(|(x, y)| canvas.pixel(x, y))
            .filter(|c| c.a == 255)
            .collect::<Vec<_>>();
        assert!(!solid.is_empty());
        assert!(solid.iter().all(|&c| c == Color::RED));
    }
}
