//! `2024-05-01 12:00:00.000 [INFO] - message`

use super::{Fields, Logger, concat};
use crate::clock::Clock;
use crate::fmt::timestamp;
use crate::level::Level;
use crate::output::Sink;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Fixed-format logger: timestamp, level label, message.
pub struct SimpleLogger {
    fields: Fields,
}

impl Default for SimpleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleLogger {
    /// Info level, system clock, stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Fields::new(),
        }
    }

    /// Builds the line for `message` without writing it.
    #[must_use]
    pub fn format_line(&self, level: Level, message: &str) -> String {
        let ts = timestamp(self.fields.clock().now());
        format!("{ts} [{level}] - {message}\n")
    }

    fn emit(&self, level: Level, message: &str) {
        self.fields.write_line(&self.format_line(level, message));
    }
}

impl Logger for SimpleLogger {
    fn print(&self, level: Level, values: &[&dyn Display]) {
        if self.fields.is_enabled(level) {
            self.emit(level, &concat(values));
        }
    }

    fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.fields.is_enabled(level) {
            self.emit(level, &fmt::format(args));
        }
    }

    fn level(&self) -> Level {
        self.fields.level()
    }

    fn set_level(&self, level: Level) {
        self.fields.set_level(level);
    }

    fn clock(&self) -> Arc<dyn Clock> {
        self.fields.clock()
    }

    fn set_clock(&self, clock: Arc<dyn Clock>) {
        self.fields.set_clock(clock);
    }

    fn sink(&self) -> Arc<dyn Sink> {
        self.fields.sink()
    }

    fn set_sink(&self, sink: Arc<dyn Sink>) {
        self.fields.set_sink(sink);
    }
}
