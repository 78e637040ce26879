use thiserror::Error;

/// Failures surfaced by the frame runtime.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output stream rejected a write, usually because the receiver exited.
    #[error("failed to write command stream")]
    Io(#[from] std::io::Error),

    /// The declared surface has no area.
    #[error("window size {width}x{height} has no area")]
    InvalidWindow { width: u32, height: u32 },

    /// A title would split into more than one protocol line.
    #[error("window title {0:?} contains a line break")]
    InvalidTitle(String),
}
