//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store receiver-agnostic draw commands for one frame
//! - keep paint order equal to insertion order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::point::PointCmd;
pub use shapes::rect::RectCmd;
