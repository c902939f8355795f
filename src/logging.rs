//! Tracing setup.
//!
//! The terminal is the game screen, so log lines go to a file or nowhere.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file subscriber if `log_path` is set.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns whether
/// a subscriber was installed.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok(); // Don't fail if already initialized

    Ok(installed)
}
