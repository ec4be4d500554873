//! Logging setup
//!
//! File logging is opt-in via `[logging] enabled = true`. When enabled,
//! log records go to `yalla.log` under the platform data directory; when
//! disabled, everything above the `log` facade is discarded.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Path of the log file when logging is enabled
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("yalla").join("yalla.log"))
}

/// Initialize the global logger according to configuration.
///
/// Safe to call exactly once at startup, before the terminal enters raw
/// mode; nothing is written to stdout/stderr afterwards.
pub fn init(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| {
            format!("Failed to open log file: {}", path.display())
        })?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging initialized");
    Ok(())
}
