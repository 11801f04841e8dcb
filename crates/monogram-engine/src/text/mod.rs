//! Font loading and glyph metrics (fontdue).

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
