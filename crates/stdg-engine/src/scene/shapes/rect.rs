use crate::coords::Rect;
use crate::paint::FillMode;
use crate::scene::{DrawCmd, DrawList};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectCmd {
    pub rect: Rect,
    pub mode: FillMode,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, mode: FillMode) -> Self {
        Self { rect, mode }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, mode: FillMode) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, mode)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect) {
        self.push_rect(rect, FillMode::Fill);
    }
}
