use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Single pixel payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointCmd {
    pub at: Vec2,
}

impl DrawList {
    #[inline]
    pub fn push_point(&mut self, at: Vec2) {
        self.push(DrawCmd::Point(PointCmd { at }));
    }
}
