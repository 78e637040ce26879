use stdg_protocol::Command;

use crate::paint::FillMode;
use crate::scene::{DrawCmd, DrawList};

/// Converts a [`DrawList`] into the protocol lines for one frame.
///
/// Every recorded item becomes exactly one line, in order, so the shape of a
/// frame depends only on what the app recorded, never on its colors. The
/// frame then closes with one `present` followed by one `handle`.
#[derive(Debug, Default)]
pub struct Encoder;

impl Encoder {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Appends the commands for `list` to `out` as one complete frame.
    pub fn encode_frame(&self, list: &DrawList, out: &mut Vec<Command>) {
        out.extend(list.items().iter().map(lower));
        out.push(Command::Present);
        out.push(Command::Handle);
    }
}

fn lower(item: &DrawCmd) -> Command {
    match item {
        DrawCmd::Color(c) => Command::Color { r: c.r, g: c.g, b: c.b },
        DrawCmd::Clear => Command::Clear,
        DrawCmd::Rect(r) => {
            let (x, y, w, h) = (r.rect.origin.x, r.rect.origin.y, r.rect.width, r.rect.height);
            match r.mode {
                FillMode::Fill => Command::FillRect { x, y, w, h },
                FillMode::Outline => Command::OutlineRect { x, y, w, h },
            }
        }
        DrawCmd::Circle(c) => {
            let (x, y, r) = (c.center.x, c.center.y, c.radius);
            match c.mode {
                FillMode::Fill => Command::FillCircle { x, y, r },
                FillMode::Outline => Command::OutlineCircle { x, y, r },
            }
        }
        DrawCmd::Line(l) => Command::Line { x1: l.from.x, y1: l.from.y, x2: l.to.x, y2: l.to.y },
        DrawCmd::Point(p) => Command::Point { x: p.at.x, y: p.at.y },
    }
}
