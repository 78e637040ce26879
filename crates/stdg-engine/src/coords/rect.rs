use super::Vec2;

/// Axis-aligned rectangle in receiver pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Vec2,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self { origin: Vec2::new(x, y), width, height }
    }

    /// Returns the same rectangle moved by `offset`.
    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, ..self }
    }
}
