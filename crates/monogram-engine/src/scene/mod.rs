//! Recorded draw streams.
//!
//! Responsibilities:
//! - outline geometry shared by every surface (`shapes`)
//! - a [`DrawSurface`](crate::surface::DrawSurface) that records instead of
//!   rasterizing, for tests and for hosts that replay commands themselves

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{approximate_ink_bounds, DrawList, TextMetrics};
pub use shapes::ShapeKind;
