//! Logger with a user-supplied line layout.

use super::{Fields, Logger, concat};
use crate::caller::{Locate, StackLocator};
use crate::clock::Clock;
use crate::fmt::{Pattern, RenderContext, timestamp};
use crate::internal;
use crate::level::Level;
use crate::output::Sink;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

enum Compiled {
    /// Source text of a lazily constructed logger, compiled on first use.
    Pending(String),
    Ready(Arc<Pattern>),
}

/// Renders each line through a [`Pattern`].
///
/// Compile and render failures never reach the caller: the logger reports them
/// through the crate's internal diagnostics, switches to [`Pattern::DEFAULT`]
/// and renders again.
pub struct PatternLogger {
    fields: Fields,
    pattern: Mutex<Compiled>,
    locator: Mutex<Arc<dyn Locate>>,
    caller_skip: AtomicUsize,
}

impl PatternLogger {
    /// Compiles `pattern` up front.
    ///
    /// # Errors
    /// Returns [`crate::Error::Pattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, crate::Error> {
        let compiled = Pattern::parse(pattern)?;
        Ok(Self::with_state(Compiled::Ready(Arc::new(compiled))))
    }

    /// Defers compilation to the first enabled log call. A pattern that does
    /// not compile is replaced by the default one at that point.
    #[must_use]
    pub fn lazy(pattern: impl Into<String>) -> Self {
        Self::with_state(Compiled::Pending(pattern.into()))
    }

    fn with_state(state: Compiled) -> Self {
        Self {
            fields: Fields::new(),
            pattern: Mutex::new(state),
            locator: Mutex::new(Arc::new(StackLocator::new())),
            caller_skip: AtomicUsize::new(0),
        }
    }

    /// The pattern source currently in effect (or still pending compilation).
    #[must_use]
    pub fn pattern(&self) -> String {
        match &*self.pattern.lock().unwrap_or_else(PoisonError::into_inner) {
            Compiled::Pending(source) => source.clone(),
            Compiled::Ready(pattern) => pattern.as_str().to_string(),
        }
    }

    /// Compiles and installs a new pattern.
    ///
    /// # Errors
    /// Returns [`crate::Error::Pattern`] and keeps the current pattern if
    /// `pattern` does not compile.
    pub fn set_pattern(&self, pattern: &str) -> Result<(), crate::Error> {
        let compiled = Pattern::parse(pattern)?;
        *self.pattern.lock().unwrap_or_else(PoisonError::into_inner) =
            Compiled::Ready(Arc::new(compiled));
        Ok(())
    }

    pub fn set_locator(&self, locator: Arc<dyn Locate>) {
        *self.locator.lock().unwrap_or_else(PoisonError::into_inner) = locator;
    }

    /// Caller frames skipped beyond this crate's own frames.
    #[must_use]
    pub fn caller_skip(&self) -> usize {
        self.caller_skip.load(Ordering::Relaxed)
    }

    /// Raise this by one for every helper function the application puts
    /// between its call sites and the logger.
    pub fn set_caller_skip(&self, skip: usize) {
        self.caller_skip.store(skip, Ordering::Relaxed);
    }

    fn compiled(&self) -> Arc<Pattern> {
        let mut state = self.pattern.lock().unwrap_or_else(PoisonError::into_inner);
        if let Compiled::Pending(source) = &*state {
            let pattern = Pattern::parse(source).unwrap_or_else(|e| {
                internal::warn(format_args!(
                    "Failed to compile pattern, using default pattern: {e}"
                ));
                Pattern::default_pattern()
            });
            *state = Compiled::Ready(Arc::new(pattern));
        }
        match &*state {
            Compiled::Ready(pattern) => Arc::clone(pattern),
            Compiled::Pending(_) => Arc::new(Pattern::default_pattern()),
        }
    }

    /// Builds the line for `message` without writing it.
    #[must_use]
    pub fn format_line(&self, level: Level, message: &str) -> String {
        let now = self.fields.clock().now();
        let locator = Arc::clone(&self.locator.lock().unwrap_or_else(PoisonError::into_inner));
        let ctx = RenderContext::new(level, message, now, locator.as_ref(), self.caller_skip());

        let pattern = self.compiled();
        match pattern.render(&ctx) {
            Ok(line) => line,
            Err(e) => {
                internal::warn(format_args!(
                    "Failed to render pattern, using default pattern: {e}"
                ));
                let fallback = Pattern::default_pattern();
                let rendered = fallback.render(&ctx);
                *self.pattern.lock().unwrap_or_else(PoisonError::into_inner) =
                    Compiled::Ready(Arc::new(fallback));
                rendered.unwrap_or_else(|_| format!("{} [{level}] - {message}\n", timestamp(now)))
            }
        }
    }

    fn emit(&self, level: Level, message: &str) {
        self.fields.write_line(&self.format_line(level, message));
    }
}

impl Logger for PatternLogger {
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
