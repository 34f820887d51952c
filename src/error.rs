//! Unified error type for all gaplog operations.

use std::path::PathBuf;

/// Error type for gaplog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error outside of record emission (config reads, flushes).
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// A log file could not be provisioned (directory creation or open failed).
    SinkUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing a rendered record to the active sink failed.
    Write(std::io::Error),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid gap duration string.
    InvalidGap(String),
    /// Unknown sink failure policy name.
    InvalidSinkFailure(String),
    /// File name pattern with an unknown strftime specifier.
    InvalidFileName(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::SinkUnavailable { path, source } => {
                write!(f, "sink unavailable: {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "write failed: {e}"),
            Self::InvalidLevel(s) => write!(f, "invalid level: {s}"),
            Self::InvalidGap(s) => write!(f, "invalid gap duration: {s}"),
            Self::InvalidSinkFailure(s) => write!(f, "invalid sink failure policy: {s}"),
            Self::InvalidFileName(s) => write!(f, "invalid file name pattern: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Write(e) | Self::SinkUnavailable { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
