//! Standard output and standard error.

use super::Sink;
use std::io::{self, Write};

/// Which standard stream a [`Console`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// The default sink of every logger is `Console::stdout()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    stream: Stream,
}

impl Console {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self.stream, Stream::Stderr)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for Console {
    // Locking the std handle keeps one line in one piece even when other
    // code prints to the same stream.
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(bytes)?,
            Stream::Stderr => io::stderr().lock().write_all(bytes)?,
        }
        Ok(bytes.len())
    }

    fn flush(&self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}
