//! TOML configuration loading and the conversions from its string fields to typed values.
//!
//! Separated from struct definitions so the loading logic stays independent of the
//! serde schema.

mod structs;

pub use structs::{FileConfig, GeneralConfig, InternalConfig};

use crate::internal;
use crate::level::Level;
use crate::rotation::{FileNaming, SinkFailure, parse_gap};
use chrono::TimeDelta;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `#[serde(default)]` on every section, so an empty file yields a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    pub internal: InternalConfig,
}

/// When the default format should emit escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Only when the destination is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub const fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl Config {
    /// Reads the config from the default location, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or
    /// TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/gaplog/gaplog.toml`, e.g. `~/.config/gaplog/gaplog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gaplog").join("gaplog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown level names fall back to `Debug` so a typo never silences logging.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|_| {
            internal::warn(&format!(
                "Unknown level '{}', using debug",
                self.general.level
            ));
            Level::Debug
        })
    }

    #[must_use]
    pub fn parse_colors(&self) -> ColorMode {
        match self.general.colors.to_lowercase().as_str() {
            "always" | "true" | "on" => ColorMode::Always,
            "never" | "false" | "off" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }

    /// # Errors
    /// `Error::InvalidGap` for malformed durations.
    pub fn parse_gap(&self) -> Result<TimeDelta, crate::Error> {
        parse_gap(&self.file.gap)
    }

    /// # Errors
    /// `Error::InvalidSinkFailure` for unknown policy names.
    pub fn parse_sink_failure(&self) -> Result<SinkFailure, crate::Error> {
        self.file.on_sink_failure.parse()
    }

    /// # Errors
    /// `Error::InvalidFileName` when `file_name` is not a valid strftime pattern.
    pub fn file_naming(&self) -> Result<FileNaming, crate::Error> {
        FileNaming::pattern(&self.file.file_name)
    }

    /// Log directory with `~` and `$VARS` expanded; unexpandable input is used verbatim.
    #[must_use]
    pub fn expand_directory(&self) -> PathBuf {
        shellexpand::full(&self.file.directory).map_or_else(
            |_| PathBuf::from(&self.file.directory),
            |expanded| PathBuf::from(expanded.as_ref()),
        )
    }

    /// Threshold for gaplog's own diagnostics; unknown names fall back to `Warn`.
    #[must_use]
    pub fn internal_level(&self) -> Level {
        self.internal.level.parse().unwrap_or(Level::Warn)
    }
}
