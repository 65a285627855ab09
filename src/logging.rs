//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use crate::app::config::config_dir;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ZOEKBALK_LOG";
pub const LOG_FILE: &str = "zoekbalk.log";
const DEFAULT_FILTER: &str = "info";

#[must_use]
pub fn log_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOG_FILE))
}

#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to the log file.
///
/// Returns the log path. On error nothing is installed and the app runs without logs.
pub fn init() -> Result<PathBuf> {
    let path = log_path().context("No home directory for the log file")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
