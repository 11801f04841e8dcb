use crate::coords::{Rect, Vec2};
use crate::paint::{Bitmap, Color, TextPaint};

use super::ShapeKind;

/// A recorded surface call. Geometry is in absolute surface pixels: any
/// translation active at record time has already been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        shape: ShapeKind,
        rect: Rect,
        color: Color,
    },
    Stroke {
        shape: ShapeKind,
        rect: Rect,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        /// Horizontal center, baseline.
        anchor: Vec2,
        paint: TextPaint,
    },
    Bitmap {
        bitmap: Bitmap,
        x: i32,
        y: i32,
    },
}
