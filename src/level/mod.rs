//! Severity levels that gate which messages reach a logger's sink.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a message's level can be compared against a logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Extra-detailed diagnostics. Rendered with the same label as `Debug`.
    Verbose = 0,
    /// Development diagnostics.
    Debug = 1,
    /// Normal operational milestones.
    #[default]
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevented an operation from completing.
    Error = 4,
    /// Failures the application is unlikely to recover from. Logging at this
    /// level never terminates the process.
    Fatal = 5,
}

impl Level {
    /// The label written into log lines. `Verbose` and `Debug` share `DEBG`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verbose | Self::Debug => "DEBG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERR",
            Self::Fatal => "FATAL",
        }
    }

    /// Label for a raw level value. Values outside the known range render as
    /// an empty string instead of failing.
    #[must_use]
    pub const fn label_of(raw: u8) -> &'static str {
        match Self::from_u8(raw) {
            Some(level) => level.label(),
            None => "",
        }
    }

    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Verbose),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// True iff a message at `self` passes a logger whose threshold is `threshold`.
    #[must_use]
    pub fn is_enabled(self, threshold: Self) -> bool {
        self >= threshold
    }

    /// Lenient name lookup used by configuration loaders.
    ///
    /// Unrecognized names fall back to [`Level::Warn`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.parse().unwrap_or(Self::Warn)
    }

    /// Convenience for iteration in tests and help output.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Verbose,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
        ]
    }
}

/// Pads to at least four characters so columns line up (`ERR ` but `FATAL`).
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4}", self.label())
    }
}

/// Returned by the strict `FromStr` conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "debug" | "debg" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
