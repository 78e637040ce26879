//! Stream header + frame loop.
//!
//! Owns the output writer and drives an [`App`](crate::core::App) one frame
//! at a time, lowering each recorded frame into protocol lines.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
