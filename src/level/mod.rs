//! Severity levels that gate which records reach the sink.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pads shorter labels so every rendered level occupies the same column width.
pub const LABEL_FILLER: char = ' ';

/// Derives `Ord` so the logger can compare a record's level against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time diagnostics, the most verbose level.
    #[default]
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Noteworthy but expected events, one step above routine info.
    Notice = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures of a single operation.
    Error = 4,
    /// Failures affecting a whole subsystem.
    Critical = 5,
    /// The process cannot continue meaningfully.
    Fatal = 6,
}

/// Upper-case names padded to the longest one, built once before any logger renders.
static LABELS: LazyLock<[String; 7]> = LazyLock::new(|| {
    let names = Level::all().map(Level::name);
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    names.map(|name| {
        let mut label = name.to_string();
        label.extend(std::iter::repeat_n(LABEL_FILLER, width - name.len()));
        label
    })
});

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Fatal => "fatal",
        }
    }

    /// Canonical upper-case name without padding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
        }
    }

    /// Display label padded with [`LABEL_FILLER`] so all levels render at equal width.
    #[must_use]
    pub fn label(self) -> &'static str {
        &LABELS[self as usize]
    }

    /// Every level, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Warn,
            Self::Error,
            Self::Critical,
            Self::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
