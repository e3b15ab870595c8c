//! Error types shared across the crate

use std::io;

use thiserror::Error;

/// Errors produced while turning `<value> <unit>` arguments into seconds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("no duration given")]
    Empty,
    #[error("invalid duration number: {0}")]
    InvalidNumber(String),
    #[error("missing unit after {0}")]
    MissingUnit(String),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("duration is too large")]
    Overflow,
}

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Bad command line input, detected before anything starts
    #[error(transparent)]
    Config(#[from] DurationError),

    #[error("unknown font: {0}")]
    UnknownFont(String),

    /// The terminal cannot be put into raw mode
    #[error("terminal unavailable: {0}")]
    Terminal(#[source] io::Error),

    #[error("failed to {action} settings file {path}: {source}")]
    Settings {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing a frame or reading a key failed mid-run
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::UnknownFont(_) | Error::Settings { .. } => 1,
            Error::Terminal(_) | Error::Io(_) => 2,
        }
    }

    /// Whether the usage text should accompany the message
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
