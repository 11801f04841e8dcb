use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

use super::Color;

/// Error returned by [`Bitmap::from_rgba`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapError {
    pub width: u32,
    pub height: u32,
    pub len: usize,
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bitmap error: {} bytes do not hold a {}x{} RGBA image",
            self.len, self.width, self.height
        )
    }
}

impl std::error::Error for BitmapError {}

/// Shared handle to decoded RGBA8 pixels.
///
/// Cloning is cheap; every clone points at the same pixels, so an image keeps
/// living as long as any badge refers to it. Decoding happens elsewhere.
#[derive(Clone)]
pub struct Bitmap(Arc<RgbaImage>);

impl Bitmap {
    #[inline]
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Wraps raw straight-alpha RGBA bytes, row-major.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let len = pixels.len();
        RgbaImage::from_raw(width, height, pixels)
            .map(Self::new)
            .ok_or(BitmapError { width, height, len })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.0.width() as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.0.height() as i32
    }

    /// Pixel at `(x, y)`; `None` when out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.0.get_pixel(x as u32, y as u32).0;
        Some(Color::rgba(r, g, b, a))
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    /// True when both handles share the same pixels.
    #[inline]
    pub fn ptr_eq(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
