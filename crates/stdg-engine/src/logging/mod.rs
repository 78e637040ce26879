//! Logging utilities.
//!
//! This module centralizes logger initialization. Producers own stdout for
//! the command stream, so every diagnostic goes to stderr.

mod init;

pub use init::{init_logging, LoggingConfig};
