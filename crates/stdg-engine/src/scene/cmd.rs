use crate::paint::Color;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::point::PointCmd;
use crate::scene::shapes::rect::RectCmd;

/// Receiver-agnostic draw command stream.
///
/// Like the receiver, the stream is stateful: `Color` selects the color that
/// every following command paints with, up to the next `Color`.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - lower the variant in `render::Encoder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Color(Color),
    /// Fill the whole surface with the current color.
    Clear,
    Rect(RectCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Point(PointCmd),
}
