//! Stepwise construction of any logger variant.

use super::{ColoredLogger, Logger, NamedLogger, PatternLogger, SimpleLogger};
use crate::caller::Locate;
use crate::clock::Clock;
use crate::level::Level;
use crate::output::Sink;
use std::sync::Arc;

/// Which line format the built logger uses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoggerKind {
    #[default]
    Simple,
    Named(String),
    Pattern(String),
}

/// Collects level, clock, sink and format choices, then builds a shareable
/// logger. Unset fields keep each logger's defaults.
///
/// ```
/// use abclog::{Level, Logger, LoggerBuilder, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = LoggerBuilder::new()
///     .named("db")
///     .level(Level::Debug)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.debugf(format_args!("connected to {}", "primary"));
/// assert!(sink.contents().contains("<db> [DEBG] - connected to primary"));
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    kind: LoggerKind,
    level: Level,
    clock: Option<Arc<dyn Clock>>,
    sink: Option<Arc<dyn Sink>>,
    locator: Option<Arc<dyn Locate>>,
    caller_skip: usize,
    colored: bool,
}

impl LoggerBuilder {
    /// A simple logger at Info level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: LoggerKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn simple(self) -> Self {
        self.kind(LoggerKind::Simple)
    }

    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        self.kind(LoggerKind::Named(name.into()))
    }

    #[must_use]
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.kind(LoggerKind::Pattern(pattern.into()))
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Uses a sink that is shared with other loggers.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Only used by pattern loggers.
    #[must_use]
    pub fn locator(mut self, locator: impl Locate + 'static) -> Self {
        self.locator = Some(Arc::new(locator));
        self
    }

    /// Only used by pattern loggers.
    #[must_use]
    pub const fn caller_skip(mut self, skip: usize) -> Self {
        self.caller_skip = skip;
        self
    }

    /// Wraps the result in a [`ColoredLogger`].
    #[must_use]
    pub const fn colored(mut self, enabled: bool) -> Self {
        self.colored = enabled;
        self
    }

    /// # Errors
    /// Returns [`crate::Error::Pattern`] if a pattern logger's pattern does not compile.
    pub fn build(self) -> Result<Arc<dyn Logger>, crate::Error> {
        let logger: Box<dyn Logger> = match &self.kind {
            LoggerKind::Simple => Box::new(SimpleLogger::new()),
            LoggerKind::Named(name) => Box::new(NamedLogger::new(name.as_str())),
            LoggerKind::Pattern(pattern) => {
                let logger = PatternLogger::new(pattern)?;
                if let Some(locator) = &self.locator {
                    logger.set_locator(Arc::clone(locator));
                }
                logger.set_caller_skip(self.caller_skip);
                Box::new(logger)
            }
        };

        logger.set_level(self.level);
        if let Some(clock) = self.clock {
            logger.set_clock(clock);
        }
        if let Some(sink) = self.sink {
            logger.set_sink(sink);
        }

        if self.colored {
            Ok(Arc::new(ColoredLogger::new(logger)))
        } else {
            Ok(Arc::from(logger))
        }
    }
}
