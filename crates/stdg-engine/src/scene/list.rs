use crate::paint::Color;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order; the receiver has no depth buffer.
/// `clear()` keeps the allocation so one list can be reused every frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    /// Appends a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Selects `color` for the commands recorded after it.
    ///
    /// Always recorded, even if `color` is already current.
    #[inline]
    pub fn push_color(&mut self, color: Color) {
        self.push(DrawCmd::Color(color));
    }

    /// Records a full-surface clear with the current color.
    #[inline]
    pub fn push_clear(&mut self) {
        self.push(DrawCmd::Clear);
    }
}
