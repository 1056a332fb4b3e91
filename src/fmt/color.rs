//! Basic 16-color ANSI escape codes used by the colored logger.

use crate::level::Level;
use std::fmt;

/// The handful of colors a log line can be wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Gray,
    Green,
    Yellow,
    Red,
    /// No color. Emits the reset code, so the line starts from the terminal default.
    None,
}

impl AnsiColor {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gray => "\x1b[30;1m",
            Self::Green => "\x1b[32;1m",
            Self::Yellow => "\x1b[33m",
            Self::Red => "\x1b[31m",
            Self::None => Self::RESET,
        }
    }

    /// Color for a level: gray for verbose, none for debug, green for info,
    /// yellow for warn, red for error and fatal.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Verbose => Self::Gray,
            Level::Debug => Self::None,
            Level::Info => Self::Green,
            Level::Warn => Self::Yellow,
            Level::Error | Level::Fatal => Self::Red,
        }
    }

    /// Like [`AnsiColor::for_level`] for a raw level value; unknown values get no color.
    #[must_use]
    pub const fn for_raw_level(raw: u8) -> Self {
        match Level::from_u8(raw) {
            Some(level) => Self::for_level(level),
            None => Self::None,
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
