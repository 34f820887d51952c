//! In-memory capture, mainly for asserting on exactly what a logger wrote.

use super::Sink;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
}

/// Clones share one buffer: hand one clone to the logger and inspect through another.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<Captured>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        let captured = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&captured.bytes).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    /// Number of `write_line` calls received.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .bytes
            .is_empty()
    }

    pub fn clear(&self) {
        let mut captured = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        captured.bytes.clear();
        captured.writes = 0;
    }
}

impl Sink for BufferSink {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        let mut captured = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        captured.bytes.extend_from_slice(line);
        captured.writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
