//! Lowering of recorded scenes into stdg protocol commands.

mod encoder;

pub use encoder::Encoder;
