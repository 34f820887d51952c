use super::Sink;
use std::io::{self, Write};

/// Adapts any `Write` (an open file, a socket, a `Vec<u8>`) into a sink.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.inner.write_all(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
