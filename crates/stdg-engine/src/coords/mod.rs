//! Coordinate and geometry types shared by scenes and the encoder.
//!
//! Canonical space:
//! - integer receiver pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Positions are signed so shapes may start off-surface; extents are unsigned.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
