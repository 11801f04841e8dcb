use monogram_engine::paint::Bitmap;

/// What a badge shows inside its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Image(Bitmap),
}

impl From<&str> for Content {
    #[inline]
    fn from(text: &str) -> Self {
        Content::Text(text.to_owned())
    }
}

impl From<String> for Content {
    #[inline]
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Bitmap> for Content {
    #[inline]
    fn from(bitmap: Bitmap) -> Self {
        Content::Image(bitmap)
    }
}

impl From<&Bitmap> for Content {
    #[inline]
    fn from(bitmap: &Bitmap) -> Self {
        Content::Image(bitmap.clone())
    }
}
