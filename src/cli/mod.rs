//! Command-line front end: log one message, or every line of stdin, to the console or
//! to rotating files.

use crate::config::Config;
use crate::fmt::Payload;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warn,
    Error,
    Critical,
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Notice => Self::Notice,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// gaplog - Write leveled log lines to the console or to rotating files.
#[derive(Debug, Parser)]
#[command(
    name = "gaplog",
    version,
    about = "Write leveled log lines to the console or to rotating files"
)]
pub struct Cli {
    /// Config file (default: <config dir>/gaplog/gaplog.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Write rotating log files into DIR instead of stdout
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,
    /// Rotation gap, e.g. 30m, 1h, 1d (0 disables rotation)
    #[arg(long, value_name = "DURATION")]
    pub gap: Option<String>,
    /// strftime pattern for log file names, e.g. %Y-%m-%d_%H.log
    #[arg(long, value_name = "PATTERN")]
    pub file_name: Option<String>,
    /// Drop records below this level
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub threshold: Option<LogLevel>,
    /// Split messages on '|' into fields; a -g/-r/-b/-y suffix colors a field
    #[arg(long)]
    pub fields: bool,
    /// Level of the record(s)
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Message text; without it every stdin line becomes one record
    pub message: Vec<String>,
}

impl Cli {
    /// Command-line flags win over config values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.file.enabled = true;
            config.file.directory.clone_from(dir);
        }
        if let Some(gap) = &self.gap {
            config.file.gap.clone_from(gap);
        }
        if let Some(name) = &self.file_name {
            config.file.file_name.clone_from(name);
        }
        if let Some(threshold) = self.threshold {
            config.general.level = Level::from(threshold).as_str().to_string();
        }
    }

    fn payload(&self, text: &str) -> Payload {
        if self.fields {
            Payload::Fields(text.split('|').map(|f| f.trim().to_string()).collect())
        } else {
            Payload::Text(text.to_string())
        }
    }
}

/// Loads config, applies flags, and writes the record(s).
///
/// # Errors
/// Config errors, an unopenable log file, or a failed write.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    internal::init_with_config(&config);

    let logger = Logger::from_config(&config)?;
    let level = Level::from(cli.level);

    if cli.message.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            logger.emit(level, cli.payload(&line))?;
        }
    } else {
        logger.emit(level, cli.payload(&cli.message.join(" ")))?;
    }

    logger.flush()
}
