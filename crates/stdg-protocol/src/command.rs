use std::fmt;

// ── Command ───────────────────────────────────────────────────────────────

/// One line of the stdg drawing protocol.
///
/// The receiver keeps a single "current color" that `clear` and every shape
/// command use, so a `Color` applies to all commands after it until the next
/// `Color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `window <w> <h>`: declares the drawing surface. Sent once, first.
    Window { width: u32, height: u32 },
    /// `title <text>`: declares the window title. Sent once.
    Title(String),
    /// `color <r> <g> <b>`
    Color { r: u8, g: u8, b: u8 },
    /// `clear`: fills the whole surface with the current color.
    Clear,
    /// `fill rect <x> <y> <w> <h>`
    FillRect { x: i64, y: i64, w: u32, h: u32 },
    /// `fill circle <x> <y> <r>`: `(x, y)` is the center.
    FillCircle { x: i64, y: i64, r: u32 },
    /// `outline rect <x> <y> <w> <h>`
    OutlineRect { x: i64, y: i64, w: u32, h: u32 },
    /// `outline circle <x> <y> <r>`
    OutlineCircle { x: i64, y: i64, r: u32 },
    /// `point <x> <y>`
    Point { x: i64, y: i64 },
    /// `line <x1> <y1> <x2> <y2>`
    Line { x1: i64, y1: i64, x2: i64, y2: i64 },
    /// `present`: shows the composed frame.
    Present,
    /// `handle`: lets the receiver drain its pending window events.
    Handle,
}

impl Command {
    /// Returns the verb as written on the wire (`"fill rect"`, `"present"`, ...).
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Window { .. } => "window",
            Command::Title(_) => "title",
            Command::Color { .. } => "color",
            Command::Clear => "clear",
            Command::FillRect { .. } => "fill rect",
            Command::FillCircle { .. } => "fill circle",
            Command::OutlineRect { .. } => "outline rect",
            Command::OutlineCircle { .. } => "outline circle",
            Command::Point { .. } => "point",
            Command::Line { .. } => "line",
            Command::Present => "present",
            Command::Handle => "handle",
        }
    }
}

/// Renders the exact wire text, without the trailing newline.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.verb();
        match self {
            Command::Window { width, height } => write!(f, "{verb} {width} {height}"),
            Command::Title(text) => write!(f, "{verb} {text}"),
            Command::Color { r, g, b } => write!(f, "{verb} {r} {g} {b}"),
            Command::FillRect { x, y, w, h } | Command::OutlineRect { x, y, w, h } => {
                write!(f, "{verb} {x} {y} {w} {h}")
            }
            Command::FillCircle { x, y, r } | Command::OutlineCircle { x, y, r } => {
                write!(f, "{verb} {x} {y} {r}")
            }
            Command::Point { x, y } => write!(f, "{verb} {x} {y}"),
            Command::Line { x1, y1, x2, y2 } => write!(f, "{verb} {x1} {y1} {x2} {y2}"),
            Command::Clear | Command::Present | Command::Handle => f.write_str(verb),
        }
    }
}
