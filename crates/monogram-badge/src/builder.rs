//! Staged badge builder.
//!
//! ```text
//! ShapeBuilder ──begin_config()──▶ ConfigBuilder ──end_config()──▶ ShapeBuilder
//!      │
//!      └──rect() / round() / rounded_rect(r)──▶ Builder ──build(..)──▶ Badge
//! ```
//!
//! Terminal calls are only reachable once a shape has been chosen, either
//! explicitly or through one of the `build_*` shortcuts. Nothing is
//! validated: every value is stored as given.

use monogram_engine::paint::{Bitmap, Color};
use monogram_engine::scene::ShapeKind;
use monogram_engine::text::FontId;

use crate::badge::Badge;
use crate::content::Content;
use crate::extent::Extent;

/// Everything collected so far.
#[derive(Debug, Clone)]
pub(crate) struct BadgeSpec {
    pub shape: ShapeKind,
    pub width: Extent,
    pub height: Extent,
    pub text_color: Color,
    pub background_color: Option<Color>,
    pub border_thickness: i32,
    pub border_color: Option<Color>,
    pub font: Option<FontId>,
    pub font_size: Extent,
    pub bold: bool,
    pub uppercase: bool,
    pub text: String,
    pub image: Option<Bitmap>,
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            width: Extent::Auto,
            height: Extent::Auto,
            text_color: Color::WHITE,
            background_color: None,
            border_thickness: 0,
            border_color: None,
            font: None,
            font_size: Extent::Auto,
            bold: false,
            uppercase: false,
            text: String::new(),
            image: None,
        }
    }
}

// ── shape stage ───────────────────────────────────────────────────────────

/// Entry stage: pick a shape, or configure first.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    spec: BadgeSpec,
}

impl ShapeBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_config(self) -> ConfigBuilder {
        ConfigBuilder { spec: self.spec }
    }

    pub fn rect(self) -> Builder {
        self.with_shape(ShapeKind::Rectangle)
    }

    /// Oval inscribed in the bounds; a circle when they are square.
    pub fn round(self) -> Builder {
        self.with_shape(ShapeKind::Oval)
    }

    pub fn rounded_rect(self, radius: f32) -> Builder {
        self.with_shape(ShapeKind::RoundedRectangle { radius })
    }

    /// Builds with the shape chosen so far (a rectangle unless changed).
    pub fn build(self, content: impl Into<Content>, fill: Color) -> Badge {
        Builder { spec: self.spec }.build(content, fill)
    }

    pub fn build_rect(self, content: impl Into<Content>, fill: Color) -> Badge {
        self.rect().build(content, fill)
    }

    pub fn build_round(self, content: impl Into<Content>, fill: Color) -> Badge {
        self.round().build(content, fill)
    }

    pub fn build_rounded_rect(self, content: impl Into<Content>, fill: Color, radius: f32) -> Badge {
        self.rounded_rect(radius).build(content, fill)
    }

    fn with_shape(mut self, shape: ShapeKind) -> Builder {
        self.spec.shape = shape;
        Builder { spec: self.spec }
    }
}

// ── config stage ──────────────────────────────────────────────────────────

/// Optional settings. Any subset, in any order.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    spec: BadgeSpec,
}

impl ConfigBuilder {
    /// Fixed content width; negative means "use the draw bounds".
    pub fn width(mut self, width: i32) -> Self {
        self.spec.width = Extent::from_px(width);
        self
    }

    /// Fixed content height; negative means "use the draw bounds".
    pub fn height(mut self, height: i32) -> Self {
        self.spec.height = Extent::from_px(height);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.spec.text_color = color;
        self
    }

    /// Tint painted as the shape fill instead of the build color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.spec.background_color = Some(color);
        self
    }

    /// Border of `thickness` pixels. Keeps an earlier explicit border color;
    /// otherwise the border is a darker shade of the fill.
    pub fn border(mut self, thickness: i32) -> Self {
        self.spec.border_thickness = thickness;
        self
    }

    pub fn border_with_color(mut self, thickness: i32, color: Color) -> Self {
        self.spec.border_thickness = thickness;
        self.spec.border_color = Some(color);
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.spec.font = Some(font);
        self
    }

    /// Fixed font size in pixels; negative means half the shorter side.
    pub fn font_size(mut self, size: i32) -> Self {
        self.spec.font_size = Extent::from_px(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.spec.bold = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.spec.uppercase = true;
        self
    }

    pub fn end_config(self) -> ShapeBuilder {
        ShapeBuilder { spec: self.spec }
    }
}

// ── terminal stage ────────────────────────────────────────────────────────

/// Shape chosen; ready to build.
///
/// Building borrows the builder mutably, so one configured builder can stamp
/// out any number of badges. The last text and the last image handed to it
/// are remembered; when both are present the image is drawn.
#[derive(Debug, Clone)]
pub struct Builder {
    spec: BadgeSpec,
}

impl Builder {
    pub fn build(&mut self, content: impl Into<Content>, fill: Color) -> Badge {
        match content.into() {
            Content::Text(text) => self.spec.text = text,
            Content::Image(bitmap) => self.spec.image = Some(bitmap),
        }
        Badge::from_spec(&self.spec, fill)
    }

    pub fn build_rect(&mut self, content: impl Into<Content>, fill: Color) -> Badge {
        self.spec.shape = ShapeKind::Rectangle;
        self.build(content, fill)
    }

    pub fn build_round(&mut self, content: impl Into<Content>, fill: Color) -> Badge {
        self.spec.shape = ShapeKind::Oval;
        self.build(content, fill)
    }

    pub fn build_rounded_rect(
        &mut self,
        content: impl Into<Content>,
        fill: Color,
        radius: f32,
    ) -> Badge {
        self.spec.shape = ShapeKind::RoundedRectangle { radius };
        self.build(content, fill)
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.spec.shape
    }
}
