use crate::scene::DrawList;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    /// Empty list to record this frame into.
    pub draw_list: &'a mut DrawList,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}
