//! Destinations for formatted log lines.
//!
//! A logger only ever hands complete lines to its [`Sink`]; it never asks what
//! kind of sink it holds. The built-in sinks cover the console, files, fan-out,
//! discarding, and in-memory capture; anything else can implement the trait.

mod console;
mod file;
mod memory;
mod multi;

pub use console::Console;
pub use file::FileSink;
pub use memory::{Discard, MemorySink};
pub use multi::MultiSink;

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// `Send + Sync` with `&self` methods so one sink can be shared by several
/// loggers and threads behind an `Arc`.
pub trait Sink: Send + Sync {
    /// Writes raw bytes, returning how many were accepted.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write(&self, bytes: &[u8]) -> io::Result<usize>;

    /// Pushes buffered bytes to the destination.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        (**self).write(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Adapts any [`Write`] implementation into a shareable sink.
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Gives the wrapped writer back, e.g. to inspect a `Vec<u8>` after a test.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn flush(&self) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
