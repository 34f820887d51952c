//! `gaplog` - Leveled logging with pluggable formats and time-gapped file rotation.
//!
//! - Seven ordered severities, `Debug` through `Fatal`, gated by a per-logger threshold
//! - Pluggable [`Format`]s turning a record into a positional template plus values
//! - Console, writer and in-memory sinks
//! - A rotating file backend that rolls over once a configured gap has elapsed,
//!   aligned to whole multiples of the gap
//!
//! # Example
//!
//! ```no_run
//! use gaplog::{Level, Log, RotatingFileLogger};
//! use chrono::TimeDelta;
//!
//! # fn main() -> Result<(), gaplog::Error> {
//! let logger = RotatingFileLogger::builder("logs")
//!     .gap(TimeDelta::hours(1))
//!     .level(Level::Info)
//!     .build()?;
//!
//! logger.info("service started")?;
//! logger.warn(["503-r", "GET-y", "/health", "12ms"])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `gaplog` command-line binary

pub mod clock;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod rotation;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::Error;
pub use fmt::{DefaultFormat, Format, FormatResult, Payload, Record, Template};
pub use level::Level;
pub use logger::{Log, Logger, LoggerBuilder};
pub use rotation::{FileNaming, RotatingFile, RotatingFileLogger, SinkFailure};
pub use sink::{BufferSink, Console, Sink, WriterSink};
