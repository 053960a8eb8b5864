// src/error.rs
use std::io;

use thiserror::Error;

/// Failures of one export invocation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no channel cards found on the page")]
    NoChannels,

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rejected duration input. The timer is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration must be between {min} and {max} minutes, got {got}")]
    OutOfRange { got: i64, min: u32, max: u32 },

    #[error("not a whole number of minutes: {0:?}")]
    NotANumber(String),
}

#[derive(Debug, Error)]
pub enum BeepError {
    #[error("no audio player available")]
    Unsupported,

    #[error(transparent)]
    Io(#[from] io::Error),
}
