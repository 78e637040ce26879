use std::io::Write;

use stdg_protocol::Command;

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::error::EmitError;
use crate::render::Encoder;
use crate::scene::DrawList;

/// Window configuration declared in the stream header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: Viewport,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "stdg".to_string(),
            initial_size: Viewport::new(400, 400),
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = Viewport::new(width, height);
        self
    }

    /// Checks that the header can be expressed as exactly two protocol lines
    /// describing a drawable surface.
    pub fn validate(&self) -> Result<(), EmitError> {
        if !self.initial_size.is_valid() {
            return Err(EmitError::InvalidWindow {
                width: self.initial_size.width,
                height: self.initial_size.height,
            });
        }
        if self.title.contains(['\n', '\r']) {
            return Err(EmitError::InvalidTitle(self.title.clone()));
        }
        Ok(())
    }

    /// The `window` and `title` commands, in stream order.
    pub fn header(&self) -> [Command; 2] {
        [
            Command::Window {
                width: self.initial_size.width,
                height: self.initial_size.height,
            },
            Command::Title(self.title.clone()),
        ]
    }
}

/// Blocking frame loop writing stdg commands to `W`.
///
/// The header is written before the first frame, once per runtime. Each
/// frame is flushed after its `handle` line, so a slow receiver blocks the
/// loop through ordinary write backpressure.
pub struct Runtime<W: Write> {
    config: RuntimeConfig,
    out: W,
    encoder: Encoder,
    draw_list: DrawList,
    commands: Vec<Command>,
    frame_index: u64,
    header_sent: bool,
}

impl<W: Write> Runtime<W> {
    /// Creates a runtime after validating `config`. Nothing is written yet.
    pub fn new(config: RuntimeConfig, out: W) -> Result<Self, EmitError> {
        config.validate()?;
        Ok(Self {
            config,
            out,
            encoder: Encoder::new(),
            draw_list: DrawList::new(),
            commands: Vec::new(),
            frame_index: 0,
            header_sent: false,
        })
    }

    /// Runs until the app returns [`AppControl::Exit`] or a write fails.
    ///
    /// Apps that always continue make this loop forever.
    pub fn run<A: App>(&mut self, app: &mut A) -> Result<(), EmitError> {
        log::info!(
            "streaming frames ({}x{}, title {:?})",
            self.config.initial_size.width,
            self.config.initial_size.height,
            self.config.title
        );
        while self.step(app)? == AppControl::Continue {}
        log::info!("app exited after {} frames", self.frame_index);
        Ok(())
    }

    /// Emits at most `frames` frames and returns how many were written.
    ///
    /// Calling it again continues the same stream without repeating the header.
    pub fn run_frames<A: App>(&mut self, app: &mut A, frames: u64) -> Result<u64, EmitError> {
        let mut written = 0;
        while written < frames {
            let control = self.step(app)?;
            written += 1;
            if control == AppControl::Exit {
                break;
            }
        }
        Ok(written)
    }

    /// Number of frames written so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Consumes the runtime and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn step<A: App>(&mut self, app: &mut A) -> Result<AppControl, EmitError> {
        if !self.header_sent {
            self.write_header()?;
        }

        self.draw_list.clear();
        let control = {
            let mut ctx = FrameCtx {
                draw_list: &mut self.draw_list,
                frame_index: self.frame_index,
            };
            app.on_frame(&mut ctx)
        };

        self.commands.clear();
        self.encoder.encode_frame(&self.draw_list, &mut self.commands);
        self.write_commands()?;

        log::trace!("frame {} written ({} lines)", self.frame_index, self.commands.len());
        self.frame_index += 1;
        Ok(control)
    }

    fn write_header(&mut self) -> Result<(), EmitError> {
        self.commands.clear();
        self.commands.extend(self.config.header());
        self.write_commands()?;
        self.header_sent = true;
        log::debug!("header written");
        Ok(())
    }

    fn write_commands(&mut self) -> Result<(), EmitError> {
        let result = self
            .commands
            .iter()
            .try_for_each(|cmd| writeln!(self.out, "{cmd}"))
            .and_then(|()| self.out.flush());

        if let Err(err) = &result {
            log::debug!("output closed at frame {}: {err}", self.frame_index);
        }
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    /// Draws one square per frame and stops after `limit` frames.
    struct Squares {
        limit: u64,
    }

    impl App for Squares {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
            let x = ctx.frame_index as i64;
            ctx.draw_list.push_color(Color::rgb(255, 255, 255));
            ctx.draw_list.push_solid_rect(Rect::new(x, 0, 1, 1));
            if ctx.frame_index + 1 >= self.limit {
                AppControl::Exit
            } else {
                AppControl::Continue
            }
        }
    }

    fn output(rt: Runtime<Vec<u8>>) -> String {
        String::from_utf8(rt.into_inner()).unwrap()
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn builder_sets_header() {
        let cfg = RuntimeConfig::new().title("demo").size(320, 200);
        let header: Vec<String> = cfg.header().iter().map(ToString::to_string).collect();
        assert_eq!(header, ["window 320 200", "title demo"]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = RuntimeConfig::new().size(0, 10).validate().unwrap_err();
        assert!(matches!(err, EmitError::InvalidWindow { width: 0, height: 10 }));
    }

    #[test]
    fn multiline_title_is_rejected() {
        let err = Runtime::new(RuntimeConfig::new().title("a\nb"), Vec::new()).err().unwrap();
        assert!(matches!(err, EmitError::InvalidTitle(_)));
    }

    // ── loop ──────────────────────────────────────────────────────────────

    #[test]
    fn run_stops_on_exit_and_writes_header_once() {
        let mut rt = Runtime::new(RuntimeConfig::new().title("t").size(8, 8), Vec::new()).unwrap();
        rt.run(&mut Squares { limit: 2 }).unwrap();
        assert_eq!(rt.frame_index(), 2);
        assert_eq!(
            output(rt),
            "window 8 8\ntitle t\n\
             color 255 255 255\nfill rect 0 0 1 1\npresent\nhandle\n\
             color 255 255 255\nfill rect 1 0 1 1\npresent\nhandle\n"
        );
    }

    #[test]
    fn run_frames_continues_the_stream() {
        let mut app = Squares { limit: u64::MAX };
        let mut rt = Runtime::new(RuntimeConfig::new(), Vec::new()).unwrap();
        assert_eq!(rt.run_frames(&mut app, 3).unwrap(), 3);
        assert_eq!(rt.run_frames(&mut app, 2).unwrap(), 2);

        let text = output(rt);
        assert_eq!(text.matches("window ").count(), 1);
        assert_eq!(text.matches("present").count(), 5);
        assert!(text.contains("fill rect 4 0 1 1"));
    }

    #[test]
    fn run_frames_honors_exit() {
        let mut rt = Runtime::new(RuntimeConfig::new(), Vec::new()).unwrap();
        assert_eq!(rt.run_frames(&mut Squares { limit: 1 }, 10).unwrap(), 1);
    }

    /// Accepts `budget` bytes, then fails like a closed pipe.
    struct ClosedAfter {
        budget: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_ends_the_loop() {
        let mut rt = Runtime::new(RuntimeConfig::new(), ClosedAfter { budget: 64 }).unwrap();
        let err = rt.run(&mut Squares { limit: u64::MAX }).unwrap_err();
        match err {
            EmitError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }
}
