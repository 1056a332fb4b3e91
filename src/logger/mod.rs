//! The [`Logger`] contract and its implementations.
//!
//! Every variant gates on its own level, formats with its own clock and writes
//! one complete line to its own sink. Fields are guarded one by one: a call
//! that races with `set_level` and `set_sink` may observe the new level and the
//! old sink. No logger-wide lock serializes them.

mod builder;
mod colored;
mod from_config;
mod named;
mod pattern;
mod simple;

pub use builder::{LoggerBuilder, LoggerKind};
pub use colored::ColoredLogger;
pub use named::NamedLogger;
pub use pattern::PatternLogger;
pub use simple::SimpleLogger;

use crate::clock::{Clock, SystemClock};
use crate::level::Level;
use crate::output::{Console, Sink};
use std::fmt::{self, Display, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Object-safe so the root slot and the colored decorator can hold any variant.
///
/// `print` renders its values by concatenating their `Display` output;
/// `printf` takes pre-built [`fmt::Arguments`], usually from `format_args!`.
/// Neither does any formatting work when the level is disabled.
pub trait Logger: Send + Sync {
    /// Logs the values' `Display` output joined with no separator:
    /// `print(level, &[&1, &2])` logs `12`. Put explicit `" "` values between
    /// operands that need spacing.
    fn print(&self, level: Level, values: &[&dyn Display]);

    fn printf(&self, level: Level, args: fmt::Arguments<'_>);

    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    /// True iff a message at `level` would be written.
    fn is_level_enabled(&self, level: Level) -> bool {
        level.is_enabled(self.level())
    }

    fn clock(&self) -> Arc<dyn Clock>;

    fn set_clock(&self, clock: Arc<dyn Clock>);

    fn sink(&self) -> Arc<dyn Sink>;

    /// Replaces the sink. Lines written before the call stay on the old sink.
    fn set_sink(&self, sink: Arc<dyn Sink>);

    /// Detailed value dumps are not implemented by any built-in logger.
    ///
    /// # Panics
    /// Always. Calling it is a programming error, not a runtime condition.
    fn inspect(&self, _value: &dyn fmt::Debug) {
        panic!("inspect is not supported");
    }

    fn verbose(&self, values: &[&dyn Display]) {
        self.print(Level::Verbose, values);
    }

    fn verbosef(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Verbose, args);
    }

    fn debug(&self, values: &[&dyn Display]) {
        self.print(Level::Debug, values);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Debug, args);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.print(Level::Info, values);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Info, args);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.print(Level::Warn, values);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Warn, args);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.print(Level::Error, values);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Error, args);
    }

    /// Logs at `Fatal`. Does not terminate the process.
    fn fatal(&self, values: &[&dyn Display]) {
        self.print(Level::Fatal, values);
    }

    /// Logs at `Fatal`. Does not terminate the process.
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.printf(Level::Fatal, args);
    }
}

macro_rules! delegate_logger {
    ($($ptr:ident),+) => {$(
        impl<L: Logger + ?Sized> Logger for $ptr<L> {
            fn print(&self, level: Level, values: &[&dyn Display]) {
                (**self).print(level, values);
            }

            fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
                (**self).printf(level, args);
            }

            fn level(&self) -> Level {
                (**self).level()
            }

            fn set_level(&self, level: Level) {
                (**self).set_level(level);
            }

            fn is_level_enabled(&self, level: Level) -> bool {
                (**self).is_level_enabled(level)
            }

            fn clock(&self) -> Arc<dyn Clock> {
                (**self).clock()
            }

            fn set_clock(&self, clock: Arc<dyn Clock>) {
                (**self).set_clock(clock);
            }

            fn sink(&self) -> Arc<dyn Sink> {
                (**self).sink()
            }

            fn set_sink(&self, sink: Arc<dyn Sink>) {
                (**self).set_sink(sink);
            }

            fn inspect(&self, value: &dyn fmt::Debug) {
                (**self).inspect(value);
            }
        }
    )+};
}

delegate_logger!(Arc, Box);

/// Unwraps a constructor result, panicking on failure.
///
/// For callers that already decided a broken logger setup is fatal, e.g.
/// `must(PatternLogger::new("{timestamp} {message}\n"))`.
///
/// # Panics
/// If `result` is an error.
#[allow(clippy::needless_pass_by_value)]
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("must: {e}"),
    }
}

/// Concatenates the `Display` output of every value.
pub(crate) fn concat(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        // Writing into a String only fails if a Display impl reports an error.
        let _ = write!(out, "{value}");
    }
    out
}

/// Level, clock and sink, each behind its own guard.
pub(crate) struct Fields {
    level: AtomicU8,
    clock: Mutex<Arc<dyn Clock>>,
    sink: Mutex<Arc<dyn Sink>>,
}

impl Fields {
    /// Info level, system clock, stdout.
    pub(crate) fn new() -> Self {
        Self {
            level: AtomicU8::new(Level::Info as u8),
            clock: Mutex::new(Arc::new(SystemClock)),
            sink: Mutex::new(Arc::new(Console::stdout())),
        }
    }

    pub(crate) fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub(crate) fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Release);
    }

    pub(crate) fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled(self.level())
    }

    pub(crate) fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn set_clock(&self, clock: Arc<dyn Clock>) {
        *self.clock.lock().unwrap_or_else(PoisonError::into_inner) = clock;
    }

    pub(crate) fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.sink.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn set_sink(&self, sink: Arc<dyn Sink>) {
        *self.sink.lock().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    /// One write per line. Failures are dropped: logging must not break the caller.
    pub(crate) fn write_line(&self, line: &str) {
        let _ = self.sink().write(line.as_bytes());
    }
}
