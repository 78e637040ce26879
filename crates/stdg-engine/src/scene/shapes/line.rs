use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Line segment payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
}

impl DrawList {
    /// Records a one-pixel line from `from` to `to`.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2) {
        self.push(DrawCmd::Line(LineCmd { from, to }));
    }
}
