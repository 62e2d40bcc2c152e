use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Sends log records to `path`. Without a call to this, log macros are no-ops.
pub fn init_logger(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")
}
