//! ANSI color decorator.

use super::Logger;
use crate::clock::Clock;
use crate::fmt::AnsiColor;
use crate::level::Level;
use crate::output::Sink;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex, PoisonError};

/// Wraps another logger and brackets each of its lines with a color code.
///
/// Every enabled call produces three writes on the wrapped logger's sink: the
/// color code, the wrapped logger's own line, and the reset code. The three
/// are serialized per decorator, so concurrent colored calls never interleave
/// their escape codes. Calls that bypass the decorator and go straight to the
/// wrapped logger are not covered by that lock.
pub struct ColoredLogger<L> {
    wrapped: L,
    lock: Mutex<()>,
}

impl<L: Logger> ColoredLogger<L> {
    #[must_use]
    pub const fn new(wrapped: L) -> Self {
        Self {
            wrapped,
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn wrapped(&self) -> &L {
        &self.wrapped
    }

    #[must_use]
    pub fn into_inner(self) -> L {
        self.wrapped
    }

    /// The color a line at `level` is wrapped in.
    #[must_use]
    pub const fn color_for(level: Level) -> AnsiColor {
        AnsiColor::for_level(level)
    }

    fn with_color(&self, level: Level, print: impl FnOnce(&L)) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if !self.wrapped.is_level_enabled(level) {
            return;
        }

        let sink = self.wrapped.sink();
        let _ = sink.write(Self::color_for(level).code().as_bytes());
        print(&self.wrapped);
        let _ = sink.write(AnsiColor::RESET.as_bytes());
    }
}

impl<L: Logger> Logger for ColoredLogger<L> {
    fn print(&self, level: Level, values: &[&dyn Display]) {
        self.with_color(level, |wrapped| wrapped.print(level, values));
    }

    fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.with_color(level, |wrapped| wrapped.printf(level, args));
    }

    fn level(&self) -> Level {
        self.wrapped.level()
    }

    fn set_level(&self, level: Level) {
        self.wrapped.set_level(level);
    }

    fn is_level_enabled(&self, level: Level) -> bool {
        self.wrapped.is_level_enabled(level)
    }

    fn clock(&self) -> Arc<dyn Clock> {
        self.wrapped.clock()
    }

    fn set_clock(&self, clock: Arc<dyn Clock>) {
        self.wrapped.set_clock(clock);
    }

    fn sink(&self) -> Arc<dyn Sink> {
        self.wrapped.sink()
    }

    fn set_sink(&self, sink: Arc<dyn Sink>) {
        self.wrapped.set_sink(sink);
    }

    fn inspect(&self, value: &dyn fmt::Debug) {
        self.wrapped.inspect(value);
    }
}
