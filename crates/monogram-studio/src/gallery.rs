//! The sample gallery: one entry per feature worth eyeballing.

use image::{Rgba, RgbaImage};
use monogram_badge::prelude::*;
use monogram_engine::text::FontId;

/// Gallery units per canvas side; `dp` scales them to the output size.
const UNITS: i32 = 60;

/// A badge placed inside the canvas with horizontal insets.
struct Layer {
    badge: Badge,
    inset_left: i32,
    inset_right: i32,
}

pub struct Sample {
    pub name: &'static str,
    pub label: &'static str,
    layers: Vec<Layer>,
}

impl Sample {
    fn single(name: &'static str, label: &'static str, badge: Badge) -> Self {
        Self { name, label, layers: vec![Layer { badge, inset_left: 0, inset_right: 0 }] }
    }

    /// Draws every layer into a `size` x `size` area at the origin.
    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: i32) {
        for layer in &self.layers {
            let bounds = Rect::from_ltrb(layer.inset_left, 0, size - layer.inset_right, size);
            layer.badge.draw(surface, bounds);
        }
    }
}

/// Builds the gallery for a canvas of `size` pixels. `font` is used for the
/// custom-typeface sample; everything else uses the surface default.
pub fn samples(size: u32, font: Option<FontId>) -> Vec<Sample> {
    let dp = |v: i32| v * size as i32 / UNITS;
    let colors = ColorGenerator::MATERIAL;
    let color = |key: &str| colors.color_for(key);

    let mut out = vec![
        Sample::single("rect", "Rectangle with text", Badge::builder().build_rect("A", color("A"))),
        Sample::single(
            "rounded_rect",
            "Round corner with text",
            Badge::builder().build_rounded_rect("B", color("B"), dp(10) as f32),
        ),
        Sample::single("round", "Round with text", Badge::builder().build_round("C", color("C"))),
        Sample::single(
            "rect_border",
            "Rectangle with border",
            Badge::build_rect("D", color("D"), |c| c.border(dp(2))),
        ),
        Sample::single(
            "rounded_rect_border",
            "Round corner with border",
            Badge::build_rounded_rect("E", color("E"), dp(10) as f32, |c| c.border(dp(2))),
        ),
        Sample::single(
            "round_border",
            "Round with border",
            Badge::build_round("F", color("F"), |c| c.border(dp(2))),
        ),
        Sample::single(
            "multiple_letters",
            "Multiple letters",
            Badge::build_rect("ak", color("AK"), |c| c.font_size(dp(20)).uppercase()),
        ),
        Sample::single(
            "font",
            "Custom font styles",
            Badge::build_rect("Bold", Color::DARK_GRAY, |c| {
                let c = c.font_size(dp(15)).text_color(Color::from_argb(0xFFF5_8559)).bold();
                match font {
                    Some(id) => c.font(id),
                    None => c,
                }
            }),
        ),
        Sample::single("misc", "Non-Latin glyph", Badge::builder().build_rect("\u{03c0}", color("\u{03c0}"))),
    ];

    // One configured builder stamps both halves.
    let mut stamp = Badge::rect(|c| c.width(dp(29)).border(dp(2)));
    out.push(Sample {
        name: "custom_size",
        label: "Custom size",
        layers: vec![
            Layer { badge: stamp.build("I", color("I")), inset_left: 0, inset_right: dp(31) },
            Layer { badge: stamp.build("J", color("J")), inset_left: dp(31), inset_right: 0 },
        ],
    });

    out.push(Sample::single(
        "image",
        "Round with image",
        Badge::build_round(checkerboard(size / 2, dp(6).max(1) as u32), color("img"), |c| c.border(dp(2))),
    ));

    out
}

/// White/transparent checkerboard standing in for a decoded photo.
fn checkerboard(side: u32, cell: u32) -> Bitmap {
    Bitmap::new(RgbaImage::from_fn(side, side, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { Rgba([255, 255, 255, 255]) } else { Rgba([0, 0, 0, 0]) }
    }))
}
