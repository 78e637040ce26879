//! stdg engine crate.
//!
//! This crate owns the producer-side pieces used by animation binaries:
//! a renderer-agnostic draw list, the lowering of that list into stdg
//! protocol lines, and the blocking frame loop that writes them out.

pub mod core;
pub mod window;
pub mod error;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;

pub use error::EmitError;
