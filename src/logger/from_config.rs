//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::fmt::DefaultFormat;
use crate::internal;
use crate::rotation::{RotatingFileBuilder, RotatingFileLogger};
use std::io::IsTerminal;

impl Logger {
    /// Rotating file output when `[file] enabled = true`, stdout otherwise.
    ///
    /// # Errors
    /// Invalid gap, sink failure policy or file name pattern, or the first log file
    /// cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        if config.file.enabled {
            let rotating = RotatingFileLogger::from_config(config)?;
            return Ok(rotating.into_boxed());
        }

        let level = config.parse_level();
        let colors = config
            .parse_colors()
            .resolve(std::io::stdout().is_terminal());
        internal::debug(&format!("Console logger: level={level}, colors={colors}"));

        Ok(LoggerBuilder::new()
            .level(level)
            .format(DefaultFormat::new().colors(colors))
            .build())
    }
}

impl RotatingFileLogger {
    /// Uses the `[file]` section regardless of its `enabled` flag.
    ///
    /// # Errors
    /// Invalid gap, sink failure policy or file name pattern, or the first log file
    /// cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Self::builder_from_config(config)?.build()
    }

    /// Starts from the config and leaves the rest (clock, provisioner) to the caller.
    ///
    /// # Errors
    /// Invalid gap, sink failure policy or file name pattern.
    pub fn builder_from_config(config: &Config) -> Result<RotatingFileBuilder, crate::Error> {
        let directory = config.expand_directory();
        let gap = config.parse_gap()?;
        let policy = config.parse_sink_failure()?;
        let naming = config.file_naming()?;
        // files are never a terminal, so auto means no colors
        let colors = config.parse_colors().resolve(false);

        internal::debug(&format!(
            "File logger: dir={}, gap={}, name={}, on_sink_failure={policy}",
            directory.display(),
            crate::rotation::format_gap(gap),
            config.file.file_name,
        ));

        Ok(Self::builder(directory)
            .level(config.parse_level())
            .gap(gap)
            .file_naming(naming)
            .on_sink_failure(policy)
            .format(DefaultFormat::new().colors(colors)))
    }
}
