//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the frame runtime and
//! the animations it drives, with a consistent per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
