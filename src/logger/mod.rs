//! The leveled logger: one mutex guards threshold, format and sink, so a record is
//! gated, formatted and written as a single critical section and lines never interleave.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::clock::{Clock, SystemClock};
use crate::fmt::{DefaultFormat, Format, Payload, Record};
use crate::level::Level;
use crate::sink::{Console, Sink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared interface of plain and rotating loggers.
pub trait Log {
    fn set_level(&self, level: Level);

    fn level(&self) -> Level;

    /// Takes effect on the next emitted record.
    fn set_format(&self, format: Box<dyn Format>);

    /// Gates, formats and writes one record.
    ///
    /// # Errors
    /// `Error::Write` when the sink rejects the line, `Error::SinkUnavailable` when a
    /// rotating sink is configured to propagate provisioning failures.
    fn emit(&self, level: Level, payload: Payload) -> Result<(), crate::Error>;

    /// # Errors
    /// See [`Log::emit`].
    fn debug(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Debug, payload.into())
    }

    /// # Errors
    /// See [`Log::emit`].
    fn info(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Info, payload.into())
    }

    /// # Errors
    /// See [`Log::emit`].
    fn notice(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Notice, payload.into())
    }

    /// # Errors
    /// See [`Log::emit`].
    fn warn(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Warn, payload.into())
    }

    /// # Errors
    /// See [`Log::emit`].
    fn error(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Error, payload.into())
    }

    /// # Errors
    /// See [`Log::emit`].
    fn critical(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Critical, payload.into())
    }

    /// Records at the highest severity. Does not terminate the process; that decision
    /// belongs to the caller.
    ///
    /// # Errors
    /// See [`Log::emit`].
    fn fatal(&self, payload: impl Into<Payload>) -> Result<(), crate::Error>
    where
        Self: Sized,
    {
        self.emit(Level::Fatal, payload.into())
    }
}

struct State<S> {
    threshold: Level,
    format: Box<dyn Format>,
    sink: S,
}

/// A leveled logger over one sink. `S` defaults to a boxed sink so most callers never
/// name it.
pub struct Logger<S = Box<dyn Sink>> {
    state: Mutex<State<S>>,
    clock: Arc<dyn Clock>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Threshold `Debug`, the default format, stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Box::new(Console::stdout()) as Box<dyn Sink>)
            .with_format(DefaultFormat::for_stdout())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl<S: Sink> Logger<S> {
    /// Threshold `Debug`, default format without colors, system clock.
    pub fn with_sink(sink: S) -> Self {
        Self::from_parts(
            Level::Debug,
            Box::new(DefaultFormat::plain()),
            sink,
            Arc::new(SystemClock),
        )
    }

    pub(crate) fn from_parts(
        threshold: Level,
        format: Box<dyn Format>,
        sink: S,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                threshold,
                format,
                sink,
            }),
            clock,
        }
    }

    #[must_use]
    pub fn with_format(self, format: impl Format + 'static) -> Self {
        self.set_format(format);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // Every operation leaves the state consistent, so a panic elsewhere under the lock
    // does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, State<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_level(&self, level: Level) {
        self.lock().threshold = level;
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().threshold
    }

    pub fn set_format(&self, format: impl Format + 'static) {
        self.lock().format = Box::new(format);
    }

    /// Gates, formats and writes one record, all under the instance lock.
    ///
    /// Records below the threshold and records the format suppresses return `Ok(())`
    /// without touching the sink.
    ///
    /// # Errors
    /// `Error::Write` when the sink rejects the line; whatever the sink's `prepare`
    /// reports (e.g. `Error::SinkUnavailable`).
    pub fn emit(&self, level: Level, payload: impl Into<Payload>) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if level < state.threshold {
            return Ok(());
        }

        let time = self.clock.now();
        state.sink.prepare(time)?;

        let record = Record {
            level,
            payload: payload.into(),
            time,
        };
        let result = state.format.format(&record);
        if !result.emit {
            return Ok(());
        }

        let mut line = result.render();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        state
            .sink
            .write_line(line.as_bytes())
            .map_err(crate::Error::Write)
    }

    /// # Errors
    /// I/O errors from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.lock().sink.flush()?;
        Ok(())
    }

    /// Runs `f` against the sink while holding the logger lock.
    pub fn map_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.lock().sink)
    }
}

impl<S: Sink + 'static> Logger<S> {
    /// Erases the sink type so differently-backed loggers share one type.
    #[must_use]
    pub fn boxed(self) -> Logger {
        let State {
            threshold,
            format,
            sink,
        } = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        Logger::from_parts(threshold, format, Box::new(sink) as Box<dyn Sink>, self.clock)
    }
}

impl<S: Sink> Log for Logger<S> {
    fn set_level(&self, level: Level) {
        Self::set_level(self, level);
    }

    fn level(&self) -> Level {
        Self::level(self)
    }

    fn set_format(&self, format: Box<dyn Format>) {
        self.lock().format = format;
    }

    fn emit(&self, level: Level, payload: Payload) -> Result<(), crate::Error> {
        Self::emit(self, level, payload)
    }
}
