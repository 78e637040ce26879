use std::str::FromStr;

use crate::command::Command;
use crate::error::ParseError;

// ── Entry points ──────────────────────────────────────────────────────────

/// Parses a whole stream, one command per line.
///
/// Blank lines are skipped. Errors carry the 1-based line they came from.
pub fn parse_str(src: &str) -> Result<Vec<Command>, ParseError> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|e| e.at_line(idx + 1)))
        .collect()
}

/// Parses a single protocol line.
///
/// A trailing `\r` is ignored so streams written on Windows parse the same.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let body = line.trim_start();

    // `title` owns the remainder of the line, spaces included.
    if let Some(rest) = body.strip_prefix("title") {
        if rest.is_empty() {
            return Ok(Command::Title(String::new()));
        }
        if let Some(text) = rest.strip_prefix(|c: char| c.is_whitespace()) {
            return Ok(Command::Title(text.to_owned()));
        }
    }

    let mut args = Args::new(body);
    let verb = args.word("command")?;

    let cmd = match verb {
        "window" => {
            let (width, height): (u32, u32) = (args.num("width")?, args.num("height")?);
            if width == 0 || height == 0 {
                return Err(ParseError::new(format!("window size {width}x{height} has no area"), 1));
            }
            Command::Window { width, height }
        }
        "color" => Command::Color {
            r: args.channel("red")?,
            g: args.channel("green")?,
            b: args.channel("blue")?,
        },
        "clear" => Command::Clear,
        "present" => Command::Present,
        "handle" => Command::Handle,
        "point" => Command::Point { x: args.num("x")?, y: args.num("y")? },
        "line" => Command::Line {
            x1: args.num("x1")?,
            y1: args.num("y1")?,
            x2: args.num("x2")?,
            y2: args.num("y2")?,
        },
        "fill" | "outline" => {
            let fill = verb == "fill";
            match args.word("shape")? {
                "rect" => {
                    let (x, y, w, h) =
                        (args.num("x")?, args.num("y")?, args.num("width")?, args.num("height")?);
                    if fill {
                        Command::FillRect { x, y, w, h }
                    } else {
                        Command::OutlineRect { x, y, w, h }
                    }
                }
                "circle" => {
                    let (x, y, r) = (args.num("x")?, args.num("y")?, args.num("radius")?);
                    if fill {
                        Command::FillCircle { x, y, r }
                    } else {
                        Command::OutlineCircle { x, y, r }
                    }
                }
                other => return Err(ParseError::new(format!("unknown shape `{other}` after `{verb}`"), 1)),
            }
        }
        other => return Err(ParseError::new(format!("unknown command `{other}`"), 1)),
    };

    args.finish(verb)?;
    Ok(cmd)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

// ── Argument cursor ───────────────────────────────────────────────────────

struct Args<'s> {
    tokens: std::str::SplitWhitespace<'s>,
}

impl<'s> Args<'s> {
    fn new(src: &'s str) -> Self {
        Self { tokens: src.split_whitespace() }
    }

    fn word(&mut self, what: &str) -> Result<&'s str, ParseError> {
        self.tokens
            .next()
            .ok_or_else(|| ParseError::new(format!("missing {what}"), 1))
    }

    fn num<T: FromStr>(&mut self, what: &str) -> Result<T, ParseError> {
        let tok = self.word(what)?;
        tok.parse()
            .map_err(|_| ParseError::new(format!("invalid {what} `{tok}`"), 1))
    }

    fn channel(&mut self, what: &str) -> Result<u8, ParseError> {
        let tok = self.word(what)?;
        tok.parse()
            .map_err(|_| ParseError::new(format!("{what} channel `{tok}` is not in 0..=255"), 1))
    }

    fn finish(mut self, verb: &str) -> Result<(), ParseError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(extra) => Err(ParseError::new(format!("unexpected argument `{extra}` for `{verb}`"), 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> Command { parse_line(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_line(src).unwrap_err() }

    // ── single lines ──────────────────────────────────────────────────────

    #[test]
    fn window() {
        assert_eq!(ok("window 400 300"), Command::Window { width: 400, height: 300 });
    }

    #[test]
    fn title_keeps_inner_spaces() {
        assert_eq!(ok("title a  moving car"), Command::Title("a  moving car".into()));
    }

    #[test]
    fn bare_title_is_empty() {
        assert_eq!(ok("title"), Command::Title(String::new()));
    }

    #[test]
    fn title_prefix_is_not_a_title() {
        assert!(err("titles here").message.contains("unknown command"));
    }

    #[test]
    fn color() {
        assert_eq!(ok("color 151 244 247"), Command::Color { r: 151, g: 244, b: 247 });
    }

    #[test]
    fn shapes() {
        assert_eq!(ok("fill rect 10 200 100 20"), Command::FillRect { x: 10, y: 200, w: 100, h: 20 });
        assert_eq!(ok("fill circle 35 221 12"), Command::FillCircle { x: 35, y: 221, r: 12 });
        assert_eq!(ok("outline rect -5 0 1 1"), Command::OutlineRect { x: -5, y: 0, w: 1, h: 1 });
        assert_eq!(ok("outline circle 0 0 3"), Command::OutlineCircle { x: 0, y: 0, r: 3 });
        assert_eq!(ok("point 4 5"), Command::Point { x: 4, y: 5 });
        assert_eq!(ok("line 1 2 3 4"), Command::Line { x1: 1, y1: 2, x2: 3, y2: 4 });
    }

    #[test]
    fn bare_verbs() {
        assert_eq!(ok("clear"), Command::Clear);
        assert_eq!(ok("present"), Command::Present);
        assert_eq!(ok("handle\r"), Command::Handle);
    }

    #[test]
    fn from_str_matches_parse_line() {
        let cmd: Command = "fill circle 85 221 12".parse().unwrap();
        assert_eq!(cmd, Command::FillCircle { x: 85, y: 221, r: 12 });
    }

    #[test]
    fn display_then_parse_is_identity() {
        let cmd = Command::Title("a moving car".into());
        assert_eq!(ok(&cmd.to_string()), cmd);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn err_channel_out_of_range() {
        assert!(err("color 256 0 0").message.contains("0..=255"));
    }

    #[test]
    fn err_negative_radius() {
        assert!(err("fill circle 0 0 -1").message.contains("radius"));
    }

    #[test]
    fn err_missing_argument() {
        assert_eq!(err("fill rect 1 2 3").message, "missing height");
    }

    #[test]
    fn err_extra_argument() {
        assert!(err("clear now").message.contains("unexpected argument"));
    }

    #[test]
    fn err_unknown_shape() {
        assert!(err("fill square 1 1 1").message.contains("unknown shape"));
    }

    #[test]
    fn err_zero_sized_window() {
        assert_eq!(err("window 0 400").message, "window size 0x400 has no area");
        assert!(err("window 400 0").message.contains("no area"));
    }

    #[test]
    fn err_empty_line() {
        assert_eq!(err("   ").message, "missing command");
    }

    // ── streams ───────────────────────────────────────────────────────────

    #[test]
    fn stream_skips_blank_lines() {
        let cmds = parse_str("window 1 1\n\ntitle t\nclear\n").unwrap();
        assert_eq!(cmds.len(), 3);
    }

    #[test]
    fn stream_error_reports_line() {
        let e = parse_str("clear\npresent\nbogus\n").unwrap_err();
        assert_eq!(e.line, 3);
        assert_eq!(e.to_string(), "stdg parse error at line 3: unknown command `bogus`");
    }
}
