//! abclog's own diagnostic channel: pattern fallbacks, config loading, file
//! sink setup.
//!
//! A `NamedLogger` called `abclog` on stderr, created on first use. Its level
//! comes from `ABCLOG_INTERNAL_LEVEL` (lenient parse, so garbage means Warn).
//! Independent of the root logger.

use crate::level::Level;
use crate::logger::{Logger, NamedLogger};
use crate::output::{Console, Sink};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Threshold for internal diagnostics.
pub const LEVEL_ENV: &str = "ABCLOG_INTERNAL_LEVEL";

static INTERNAL_LOGGER: OnceLock<NamedLogger> = OnceLock::new();

fn logger() -> &'static NamedLogger {
    INTERNAL_LOGGER.get_or_init(|| {
        let logger = NamedLogger::new("abclog");
        logger.set_sink(Arc::new(Console::stderr()));
        let level = std::env::var(LEVEL_ENV).map_or(Level::Warn, |v| Level::parse(&v));
        logger.set_level(level);
        logger
    })
}

/// Redirects internal diagnostics, e.g. into a `MemorySink` in tests.
pub fn set_sink(sink: Arc<dyn Sink>) {
    logger().set_sink(sink);
}

pub fn set_level(level: Level) {
    logger().set_level(level);
}

#[must_use]
pub fn level() -> Level {
    logger().level()
}

fn log(level: Level, args: fmt::Arguments<'_>) {
    logger().printf(level, args);
}

pub fn debug(args: fmt::Arguments<'_>) {
    log(Level::Debug, args);
}

pub fn info(args: fmt::Arguments<'_>) {
    log(Level::Info, args);
}

pub fn warn(args: fmt::Arguments<'_>) {
    log(Level::Warn, args);
}

pub fn error(args: fmt::Arguments<'_>) {
    log(Level::Error, args);
}
