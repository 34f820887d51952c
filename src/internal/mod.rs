//! Diagnostics about gaplog itself. Rotation events and provisioning failures go to
//! stderr, never into the files being written.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if multiple entry
//! points race to call `init`.

use crate::config::Config;
use crate::fmt::{DefaultFormat, Payload};
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Console;
use std::io::IsTerminal;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger<Console>> = OnceLock::new();

/// Only the first call takes effect, unless a warning already forced the default logger.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level));
    if !was_init {
        debug(&format!("Internal logger ready (level: {level})"));
    }
}

/// Reuses the already-loaded config instead of reading it again.
pub fn init_with_config(config: &Config) {
    init(config.internal_level());
}

fn build_internal_logger(level: Level) -> Logger<Console> {
    let logger = Logger::with_sink(Console::stderr())
        .with_format(DefaultFormat::new().colors(std::io::stderr().is_terminal()));
    logger.set_level(level);
    logger
}

/// Debug and info are no-ops before `init`. Warnings and errors initialize a default
/// logger at `Warn` so they are never lost. Failures writing to stderr have nowhere else
/// to go and are dropped.
fn log(level: Level, msg: &str) {
    let logger = if level >= Level::Warn {
        Some(INTERNAL_LOGGER.get_or_init(|| build_internal_logger(Level::Warn)))
    } else {
        INTERNAL_LOGGER.get()
    };
    if let Some(logger) = logger {
        let _ = logger.emit(level, payload(msg));
    }
}

// Plain text, so a message ending in a field tag keeps its last two characters.
fn payload(msg: &str) -> Payload {
    Payload::Text(format!("gaplog: {msg}"))
}

/// Whether `init` has run or a warning has already forced the default logger.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

pub fn info(msg: &str) {
    log(Level::Info, msg);
}

pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}

pub fn error(msg: &str) {
    log(Level::Error, msg);
}
