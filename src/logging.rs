//! File logging. The terminal belongs to the UI, so records go to
//! `emosante.log` in the data directory.

use color_eyre::eyre::{eyre, Result, WrapErr};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| eyre!("unsupported log level `{}`", level))
}

pub fn init(level: &str, path: &Path) -> Result<()> {
    let level = parse_level(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).map_err(|e| eyre!("failed to start logger: {}", e))?;

    log::info!(
        "event=app_start version={} platform={} level={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        level
    );
    Ok(())
}
