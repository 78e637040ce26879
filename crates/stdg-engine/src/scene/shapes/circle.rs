use crate::coords::Vec2;
use crate::paint::FillMode;
use crate::scene::{DrawCmd, DrawList};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: u32,
    pub mode: FillMode,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: u32, mode: FillMode) -> Self {
        Self { center, radius, mode }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: u32, mode: FillMode) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, mode)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, center: Vec2, radius: u32) {
        self.push_circle(center, radius, FillMode::Fill);
    }
}
