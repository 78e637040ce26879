use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Animation contract driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called once per frame. Record the frame into `ctx.draw_list`.
    ///
    /// The draw list arrives empty. Returning [`AppControl::Exit`] still emits
    /// the frame just recorded, then stops the loop.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
