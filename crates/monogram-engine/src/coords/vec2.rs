/// 2D point in surface pixels. Text anchors land between pixels, so this is
/// float-valued while [`Rect`](super::Rect) is integral.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shifts the point by a whole-pixel offset.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx as f32, self.y + dy as f32)
    }
}
