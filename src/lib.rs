#![forbid(unsafe_code)]

//! `abclog` - leveled logging with pluggable sinks.
//!
//! - Six levels from `Verbose` to `Fatal`, gated per logger
//! - Simple, named and pattern-templated loggers, plus an ANSI color decorator
//! - Sinks for the console, files, fan-out, in-memory capture and discarding
//! - Swappable clocks so tests can freeze time
//! - A process-wide root logger behind free functions and macros
//! - TOML configuration
//!
//! # Example
//!
//! ```
//! use abclog::{ColoredLogger, Level, Logger, NamedLogger};
//! use std::sync::Arc;
//!
//! abclog::root::init();
//!
//! let logger = NamedLogger::new("net");
//! logger.set_level(Level::Debug);
//! abclog::root::set_root(Arc::new(ColoredLogger::new(logger)));
//!
//! abclog::info!("connected to {}", "10.0.0.7");
//! abclog::root::debug(&[&"handshake ", &3, &" ms"]);
//! ```

pub mod caller;
pub mod clock;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod root;

pub use caller::{CallerInfo, FixedLocator, Locate, StackLocator};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::Error;
pub use fmt::{AnsiColor, Pattern, PatternError};
pub use level::{Level, ParseLevelError};
pub use logger::{
    ColoredLogger, Logger, LoggerBuilder, LoggerKind, NamedLogger, PatternLogger, SimpleLogger,
    must,
};
pub use output::{Console, Discard, FileSink, MemorySink, MultiSink, Sink, WriterSink};
pub use root::{root, set_root};
