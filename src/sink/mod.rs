//! Where rendered lines end up. The logger only knows the `Sink` trait, so console
//! streams, arbitrary writers, capture buffers and rotating files plug in the same way.

mod buffer;
mod console;
mod writer;

pub use buffer::BufferSink;
pub use console::Console;
pub use writer::WriterSink;

use chrono::{DateTime, Local};
use std::io;

/// `Send` so the logger holding it can be shared across threads behind its mutex.
pub trait Sink: Send {
    /// Called under the logger lock for every admitted record, before it is formatted.
    /// Sinks that swap their destination over time (rotation) do it here.
    ///
    /// # Errors
    /// A sink that cannot be made ready returns the reason; the record is then dropped.
    fn prepare(&mut self, now: DateTime<Local>) -> Result<(), crate::Error> {
        let _ = now;
        Ok(())
    }

    /// Writes one complete, newline-terminated line in a single call.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&mut self) -> io::Result<()>;
}

impl Sink for Box<dyn Sink> {
    fn prepare(&mut self, now: DateTime<Local>) -> Result<(), crate::Error> {
        (**self).prepare(now)
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
