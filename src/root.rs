//! The process-wide root logger behind the free functions and macros.
//!
//! Call [`init`] (or [`init_from_config`]) once at process entry. Any access
//! before that installs the default [`SimpleLogger`] on demand, so library code
//! that logs early never panics.
//!
//! Reading the slot is lock-free: a disabled call costs one atomic load and a
//! level comparison. [`set_root`] swaps the reference atomically and drops the
//! previous logger afterwards, so a retiring logger may itself log through the
//! root. A thread that already holds an `Arc` from [`root`] keeps logging to
//! that logger after a [`set_root`].

use crate::config::Config;
use crate::level::Level;
use crate::logger::{Logger, SimpleLogger};
use arc_swap::ArcSwap;
use std::fmt::{self, Display};
use std::sync::{Arc, OnceLock};

static ROOT: OnceLock<ArcSwap<Arc<dyn Logger>>> = OnceLock::new();

fn default_root() -> ArcSwap<Arc<dyn Logger>> {
    let logger: Arc<dyn Logger> = Arc::new(SimpleLogger::new());
    ArcSwap::from_pointee(logger)
}

fn slot() -> &'static ArcSwap<Arc<dyn Logger>> {
    ROOT.get_or_init(default_root)
}

/// Installs the default root logger. Returns `false` if a root was already
/// installed (by an earlier `init`, [`set_root`] or any logging call).
pub fn init() -> bool {
    let mut installed = false;
    ROOT.get_or_init(|| {
        installed = true;
        default_root()
    });
    installed
}

/// Builds the logger `config` describes and installs it as root.
///
/// # Errors
/// Propagates config loading and logger construction failures; the current
/// root stays in place.
pub fn init_from_config(config: &Config) -> Result<(), crate::Error> {
    let logger = config.build()?;
    set_root(logger);
    Ok(())
}

/// The logger free functions currently delegate to.
#[must_use]
pub fn root() -> Arc<dyn Logger> {
    let current = slot().load();
    Arc::clone(&**current)
}

/// Replaces the root logger for every call made afterwards.
pub fn set_root(logger: Arc<dyn Logger>) {
    let previous = slot().swap(Arc::new(logger));
    drop(previous);
}

pub fn print(level: Level, values: &[&dyn Display]) {
    let logger = slot().load();
    if logger.is_level_enabled(level) {
        logger.print(level, values);
    }
}

pub fn printf(level: Level, args: fmt::Arguments<'_>) {
    let logger = slot().load();
    if logger.is_level_enabled(level) {
        logger.printf(level, args);
    }
}

pub fn verbose(values: &[&dyn Display]) {
    print(Level::Verbose, values);
}

pub fn verbosef(args: fmt::Arguments<'_>) {
    printf(Level::Verbose, args);
}

pub fn debug(values: &[&dyn Display]) {
    print(Level::Debug, values);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    printf(Level::Debug, args);
}

pub fn info(values: &[&dyn Display]) {
    print(Level::Info, values);
}

pub fn infof(args: fmt::Arguments<'_>) {
    printf(Level::Info, args);
}

pub fn warn(values: &[&dyn Display]) {
    print(Level::Warn, values);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    printf(Level::Warn, args);
}

pub fn error(values: &[&dyn Display]) {
    print(Level::Error, values);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    printf(Level::Error, args);
}

/// Does not terminate the process.
pub fn fatal(values: &[&dyn Display]) {
    print(Level::Fatal, values);
}

/// Does not terminate the process.
pub fn fatalf(args: fmt::Arguments<'_>) {
    printf(Level::Fatal, args);
}

/// Sets the level of the current root logger.
pub fn set_level(level: Level) {
    root().set_level(level);
}

#[must_use]
pub fn level() -> Level {
    root().level()
}

#[must_use]
pub fn is_level_enabled(level: Level) -> bool {
    slot().load().is_level_enabled(level)
}
