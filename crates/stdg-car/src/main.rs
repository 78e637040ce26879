use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use stdg_car::{CarAnimation, window_config};
use stdg_engine::logging::{LoggingConfig, init_logging};
use stdg_engine::window::Runtime;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Frames are flushed one at a time by the runtime; the buffer only
    // batches the lines inside a frame.
    let out = BufWriter::new(io::stdout().lock());
    let mut runtime = Runtime::new(window_config(), out).context("invalid window configuration")?;

    let mut animation = CarAnimation::default();
    log::debug!("car starts at x={}", animation.position());

    // Only ends when the receiver goes away and a write fails.
    runtime
        .run(&mut animation)
        .context("receiver stopped reading the command stream")?;

    Ok(())
}
