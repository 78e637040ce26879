//! Command model and line codec for the **stdg** drawing protocol.
//!
//! stdg is a line-oriented text protocol: a producer writes one command per
//! line to a receiver's standard input, and the receiver owns the window,
//! the current draw color, and all rasterization.
//!
//! This crate is intentionally dependency-free so receivers, producers, and
//! test harnesses can share it without pulling in engine code.
//!
//! # Commands
//!
//! | Line | Meaning |
//! |------|---------|
//! | `window w h` | declare the surface size (once) |
//! | `title text` | declare the window title (once) |
//! | `color r g b` | set the current color |
//! | `clear` | fill the surface with the current color |
//! | `fill rect x y w h` / `outline rect x y w h` | rectangle |
//! | `fill circle x y r` / `outline circle x y r` | circle centered at `(x, y)` |
//! | `point x y` / `line x1 y1 x2 y2` | pixel / segment |
//! | `present` | show the composed frame |
//! | `handle` | let the receiver process its events |
//!
//! # Quick start
//!
//! ```rust
//! use stdg_protocol::{parse_str, Command};
//!
//! let cmds = parse_str("window 400 400\ntitle demo\nclear\n").unwrap();
//! assert_eq!(cmds[0], Command::Window { width: 400, height: 400 });
//! assert_eq!(cmds[2].to_string(), "clear");
//! ```

pub mod command;
pub mod error;
pub mod parser;

pub use command::Command;
pub use error::ParseError;
pub use parser::{parse_line, parse_str};
