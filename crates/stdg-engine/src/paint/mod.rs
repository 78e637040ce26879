//! Paint model for scene commands.
//!
//! The receiver keeps one opaque current color, so a paint is just a color
//! plus whether the shape is filled or stroked.

pub mod color;

pub use color::Color;

/// How a closed shape is painted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillMode {
    #[default]
    Fill,
    Outline,
}
