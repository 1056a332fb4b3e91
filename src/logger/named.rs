//! `2024-05-01 12:00:00.000 <db> [INFO] - message`

use super::{Fields, Logger, concat};
use crate::clock::Clock;
use crate::fmt::timestamp;
use crate::level::Level;
use crate::output::Sink;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex, PoisonError};

/// Like [`super::SimpleLogger`], with a name between timestamp and level.
pub struct NamedLogger {
    fields: Fields,
    name: Mutex<String>,
}

impl NamedLogger {
    /// Info level, system clock, stdout.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: Fields::new(),
            name: Mutex::new(name.into()),
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.name
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.lock().unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    /// Builds the line for `message` without writing it.
    #[must_use]
    pub fn format_line(&self, level: Level, message: &str) -> String {
        let ts = timestamp(self.fields.clock().now());
        let name = self.name();
        format!("{ts} <{name}> [{level}] - {message}\n")
    }

    fn emit(&self, level: Level, message: &str) {
        self.fields.write_line(&self.format_line(level, message));
    }
}

impl Logger for NamedLogger {
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
