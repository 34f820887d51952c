//! A leveled logger wrapped around a [`RotatingFile`] sink. Rotation lives in the sink's
//! `prepare` hook rather than in the format, so swapping the format keeps rotation intact.

use super::file::RotatingFile;
use super::naming::FileNaming;
use super::policy::SinkFailure;
use super::provision::{FsProvisioner, Provision};
use crate::clock::{Clock, SystemClock};
use crate::fmt::{DefaultFormat, Format, Payload};
use crate::level::Level;
use crate::logger::{Log, Logger};
use chrono::{DateTime, Local, TimeDelta};
use std::path::PathBuf;
use std::sync::Arc;

pub struct RotatingFileLogger {
    inner: Logger<RotatingFile>,
}

impl RotatingFileLogger {
    /// Daily file names, no rotation (gap zero), threshold `Debug`, plain default format.
    ///
    /// # Errors
    /// `Error::SinkUnavailable` when the first file cannot be opened.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        Self::builder(directory).build()
    }

    #[must_use]
    pub fn builder(directory: impl Into<PathBuf>) -> RotatingFileBuilder {
        RotatingFileBuilder::new(directory)
    }

    /// The wrapped logger, for APIs that take a `Logger<RotatingFile>`.
    #[must_use]
    pub const fn logger(&self) -> &Logger<RotatingFile> {
        &self.inner
    }

    /// Gives up the rotation accessors in exchange for the common `Logger` type.
    #[must_use]
    pub fn into_boxed(self) -> Logger {
        self.inner.boxed()
    }

    pub fn set_level(&self, level: Level) {
        self.inner.set_level(level);
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.inner.level()
    }

    pub fn set_format(&self, format: impl Format + 'static) {
        self.inner.set_format(format);
    }

    /// See [`Logger::emit`]; the rotation check runs first for every admitted record.
    ///
    /// # Errors
    /// `Error::Write`, or `Error::SinkUnavailable` under [`SinkFailure::Propagate`].
    pub fn emit(&self, level: Level, payload: impl Into<Payload>) -> Result<(), crate::Error> {
        self.inner.emit(level, payload)
    }

    /// # Errors
    /// I/O errors from the active file.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.inner.flush()
    }

    /// Zero disables rotation. The reference boundary is not reset.
    pub fn set_gap(&self, gap: TimeDelta) {
        self.inner.map_sink(|file| file.set_gap(gap));
    }

    #[must_use]
    pub fn gap(&self) -> TimeDelta {
        self.inner.map_sink(|file| file.gap())
    }

    pub fn set_file_naming(&self, naming: FileNaming) {
        self.inner.map_sink(|file| file.set_naming(naming));
    }

    pub fn set_sink_failure(&self, policy: SinkFailure) {
        self.inner.map_sink(|file| file.set_sink_failure(policy));
    }

    #[must_use]
    pub fn last_rotation(&self) -> DateTime<Local> {
        self.inner.map_sink(|file| file.last_rotation())
    }

    #[must_use]
    pub fn active_path(&self) -> PathBuf {
        self.inner.map_sink(|file| file.active_path().to_path_buf())
    }

    #[must_use]
    pub fn directory(&self) -> PathBuf {
        self.inner.map_sink(|file| file.directory().to_path_buf())
    }
}

impl Log for RotatingFileLogger {
    fn set_level(&self, level: Level) {
        self.inner.set_level(level);
    }

    fn level(&self) -> Level {
        self.inner.level()
    }

    fn set_format(&self, format: Box<dyn Format>) {
        Log::set_format(&self.inner, format);
    }

    fn emit(&self, level: Level, payload: Payload) -> Result<(), crate::Error> {
        self.inner.emit(level, payload)
    }
}

/// Everything but the directory has a default.
pub struct RotatingFileBuilder {
    directory: PathBuf,
    gap: TimeDelta,
    naming: FileNaming,
    provisioner: Arc<dyn Provision>,
    on_failure: SinkFailure,
    level: Level,
    format: Option<Box<dyn Format>>,
    clock: Arc<dyn Clock>,
}

impl RotatingFileBuilder {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            gap: TimeDelta::zero(),
            naming: FileNaming::default(),
            provisioner: Arc::new(FsProvisioner),
            on_failure: SinkFailure::default(),
            level: Level::Debug,
            format: None,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub const fn gap(mut self, gap: TimeDelta) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn file_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn provisioner(mut self, provisioner: impl Provision + 'static) -> Self {
        self.provisioner = Arc::new(provisioner);
        self
    }

    #[must_use]
    pub const fn on_sink_failure(mut self, policy: SinkFailure) -> Self {
        self.on_failure = policy;
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Defaults to [`DefaultFormat::plain`]: escape codes do not belong in files.
    #[must_use]
    pub fn format(mut self, format: impl Format + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Opens the first file, named after the clock's current time.
    ///
    /// # Errors
    /// `Error::SinkUnavailable` when the first file cannot be opened.
    pub fn build(self) -> Result<RotatingFileLogger, crate::Error> {
        let now = self.clock.now();
        let file = RotatingFile::open(self.directory, self.naming, self.provisioner, now)?
            .with_gap(self.gap)
            .with_sink_failure(self.on_failure);
        let format = self
            .format
            .unwrap_or_else(|| Box::new(DefaultFormat::plain()));

        Ok(RotatingFileLogger {
            inner: Logger::from_parts(self.level, format, file, self.clock),
        })
    }
}
