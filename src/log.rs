// src/log.rs
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_DIR, LOG_ENV, LOG_FILE};

pub fn log_path() -> PathBuf {
    PathBuf::from(LOG_DIR).join(LOG_FILE)
}

/// Install the file subscriber. Level comes from `TGSTAT_LOG` (default `info`).
/// Until this runs, the log macros are no-ops.
pub fn init() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(LOG_DIR)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
