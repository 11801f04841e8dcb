use monogram_engine::coords::{Rect, Vec2};
use monogram_engine::paint::{Bitmap, Color, ColorFilter, Opacity, TextPaint};
use monogram_engine::scene::ShapeKind;
use monogram_engine::surface::DrawSurface;
use monogram_engine::text::FontId;

use crate::builder::{BadgeSpec, Builder, ConfigBuilder, ShapeBuilder};
use crate::content::Content;
use crate::extent::Extent;

/// A finished badge: shape, optional border, and a centered label or image.
///
/// Drawing is a pure function of the badge and the bounds, so the same badge
/// can be drawn at any size and from several threads at once (each with its
/// own surface).
#[derive(Debug, Clone)]
pub struct Badge {
    shape: ShapeKind,
    width: Extent,
    height: Extent,
    font_size: Extent,

    fill_color: Color,
    shape_paint: Color,
    border_thickness: i32,
    border_color: Color,

    text: String,
    image: Option<Bitmap>,
    text_color: Color,
    bold: bool,
    font: Option<FontId>,

    alpha: Option<u8>,
    color_filter: Option<ColorFilter>,
}

impl Badge {
    /// Starts the staged builder.
    #[inline]
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }

    // ── closure shortcuts ─────────────────────────────────────────────────

    /// Rectangle builder configured by `cfg`.
    ///
    /// ```
    /// use monogram_badge::Badge;
    /// use monogram_engine::paint::Color;
    ///
    /// let mut stamp = Badge::rect(|c| c.width(29).border(2));
    /// let left = stamp.build("I", Color::RED);
    /// let right = stamp.build("J", Color::BLUE);
    /// assert_eq!(left.border_thickness(), right.border_thickness());
    /// ```
    pub fn rect(cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder) -> Builder {
        Self::configured(cfg).rect()
    }

    pub fn round(cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder) -> Builder {
        Self::configured(cfg).round()
    }

    pub fn rounded_rect(radius: f32, cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder) -> Builder {
        Self::configured(cfg).rounded_rect(radius)
    }

    pub fn build_rect(
        content: impl Into<Content>,
        fill: Color,
        cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder,
    ) -> Badge {
        Self::configured(cfg).build_rect(content, fill)
    }

    pub fn build_round(
        content: impl Into<Content>,
        fill: Color,
        cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder,
    ) -> Badge {
        Self::configured(cfg).build_round(content, fill)
    }

    pub fn build_rounded_rect(
        content: impl Into<Content>,
        fill: Color,
        radius: f32,
        cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder,
    ) -> Badge {
        Self::configured(cfg).build_rounded_rect(content, fill, radius)
    }

    fn configured(cfg: impl FnOnce(ConfigBuilder) -> ConfigBuilder) -> ShapeBuilder {
        cfg(ShapeBuilder::new().begin_config()).end_config()
    }

    pub(crate) fn from_spec(spec: &BadgeSpec, fill: Color) -> Self {
        let text = if spec.uppercase { spec.text.to_uppercase() } else { spec.text.clone() };
        let badge = Self {
            shape: spec.shape,
            width: spec.width,
            height: spec.height,
            font_size: spec.font_size,
            fill_color: fill,
            shape_paint: spec.background_color.unwrap_or(fill),
            border_thickness: spec.border_thickness,
            border_color: spec.border_color.unwrap_or_else(|| fill.darker_shade()),
            text,
            image: spec.image.clone(),
            text_color: spec.text_color,
            bold: spec.bold,
            font: spec.font,
            alpha: None,
            color_filter: None,
        };
        log::debug!(
            "built badge: {:?}, {}, border {}",
            badge.shape,
            if badge.image.is_some() { "image" } else { "text" },
            badge.border_thickness,
        );
        badge
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws the badge into `bounds`: fill, then border, then content.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, bounds: Rect) {
        log::trace!("draw {:?} into {:?}", self.shape, bounds);

        surface.fill_shape(self.shape, bounds, self.shape_paint);

        if self.border_thickness > 0 {
            self.draw_border(surface, bounds);
        }

        let width = self.width.resolve(bounds.width);
        let height = self.height.resolve(bounds.height);

        match &self.image {
            Some(bitmap) => {
                // Offsets are relative to the bounds origin.
                let count = surface.save();
                surface.translate(bounds.x, bounds.y);
                surface.draw_bitmap(
                    bitmap,
                    (width - bitmap.width()) / 2,
                    (height - bitmap.height()) / 2,
                );
                surface.restore_to_count(count);
            }
            None => self.draw_text(surface, bounds, width, height),
        }
    }

    /// Stroke centered on the shape edge: the outline is inset by half the
    /// thickness, rounded up.
    fn draw_border<S: DrawSurface + ?Sized>(&self, surface: &mut S, bounds: Rect) {
        let t = self.border_thickness;
        let inset = t / 2 + t % 2;
        surface.stroke_shape(
            self.shape,
            bounds.inset(inset, inset),
            self.border_thickness as f32,
            self.border_color,
        );
    }

    /// Text goes through no translation; its anchor is computed in absolute
    /// surface coordinates.
    fn draw_text<S: DrawSurface + ?Sized>(&self, surface: &mut S, bounds: Rect, width: i32, height: i32) {
        let size = self.font_size.resolve(width.min(height) / 2);
        let paint = self.text_paint(size as f32);

        // Center the glyph ink, not the baseline.
        let ink = surface.measure_text(&self.text, &paint);
        let anchor = Vec2::new(
            (bounds.x + width / 2) as f32,
            (bounds.y + height / 2) as f32 - ink.exact_center_y(),
        );
        surface.draw_text(&self.text, anchor, &paint);
    }

    /// Paint for one draw call.
    pub fn text_paint(&self, size: f32) -> TextPaint {
        let color = match self.alpha {
            Some(alpha) => self.text_color.with_alpha(alpha),
            None => self.text_color,
        };
        TextPaint { size, bold: self.bold, font: self.font, color, color_filter: self.color_filter }
    }

    // ── host-facing state ─────────────────────────────────────────────────

    /// Overrides the text alpha. Fill and border are unaffected.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = Some(alpha);
    }

    /// Filters the text color. Fill and border are unaffected.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.color_filter = filter;
    }

    /// Text and border alpha can vary, so a badge never claims to be opaque.
    ///
    /// ```
    /// use monogram_badge::Badge;
    /// use monogram_engine::paint::{Color, Opacity};
    ///
    /// let badge = Badge::builder().build_round("A", Color::BLUE);
    /// let needs_backdrop = match badge.opacity() {
    ///     Opacity::Opaque => false,
    ///     Opacity::Translucent | Opacity::Transparent => true,
    /// };
    /// assert!(needs_backdrop);
    /// ```
    #[inline]
    pub fn opacity(&self) -> Opacity {
        Opacity::Translucent
    }

    /// Configured width; `Auto` when the badge sizes itself to its bounds.
    #[inline]
    pub fn intrinsic_width(&self) -> Extent {
        self.width
    }

    #[inline]
    pub fn intrinsic_height(&self) -> Extent {
        self.height
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[inline]
    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    #[inline]
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Label as it will be drawn (already uppercased if requested).
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The image, which when present is drawn instead of the text.
    #[inline]
    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }
}
