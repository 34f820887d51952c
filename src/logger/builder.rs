//! Stepwise construction so callers set only what differs from the defaults.

use super::Logger;
use crate::clock::{Clock, SystemClock};
use crate::fmt::{DefaultFormat, Format};
use crate::level::Level;
use crate::sink::{Console, Sink};
use std::io::IsTerminal;
use std::sync::Arc;

enum Target {
    Stdout,
    Stderr,
    Custom(Box<dyn Sink>),
}

pub struct LoggerBuilder {
    level: Level,
    format: Option<Box<dyn Format>>,
    target: Target,
    clock: Arc<dyn Clock>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Debug threshold, stdout, default format with terminal-detected colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            format: None,
            target: Target::Stdout,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Format + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Without an explicit format, custom sinks get the default format without colors.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.target = Target::Custom(Box::new(sink));
        self
    }

    /// Diagnostics and piped tools keep stdout clean by logging to stderr.
    #[must_use]
    pub fn stderr(mut self) -> Self {
        self.target = Target::Stderr;
        self
    }

    /// Tests move time by hand instead of sleeping.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let (sink, colors): (Box<dyn Sink>, bool) = match self.target {
            Target::Stdout => (
                Box::new(Console::stdout()),
                std::io::stdout().is_terminal(),
            ),
            Target::Stderr => (
                Box::new(Console::stderr()),
                std::io::stderr().is_terminal(),
            ),
            Target::Custom(sink) => (sink, false),
        };
        let format = self
            .format
            .unwrap_or_else(|| Box::new(DefaultFormat::new().colors(colors)));
        Logger::from_parts(self.level, format, sink, self.clock)
    }
}
