//! A car driving left to right, drawn as a stdg command stream.
//!
//! Pipe the binary into a stdg receiver:
//!
//! ```text
//! stdg-car | stdg
//! ```

mod animation;
mod geometry;
mod style;

pub use animation::{CarAnimation, START_POSITION, window_config};
pub use geometry::{CarGeometry, Wheel};
pub use style::CarStyle;
