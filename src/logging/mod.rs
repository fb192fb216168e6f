//! Diagnostics for the dialogs.
//!
//! Stdout belongs to the dialogs while they run, so log output only ever
//! goes to a file. Without one, no subscriber is installed and every
//! `tracing` event is discarded.
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `TERMDIALOG_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from a directive, falling back to [`DEFAULT_FILTER`]
/// when the directive is missing or does not parse.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global `fmt` subscriber appending to `file`.
///
/// Returns `Ok(false)` without installing anything when `file` is `None`.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a global subscriber is
/// already set.
pub fn init(
    directive: Option<&str>,
    file: Option<&Path>,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    let Some(path) = file else {
        return Ok(false);
    };

    let log_file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()?;
    Ok(true)
}
