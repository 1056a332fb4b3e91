//! Configuration struct definitions.

use serde::Deserialize;

/// Which logger to build and how it filters.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    /// `simple`, `named` or `pattern`.
    pub kind: String,
    /// Minimum level. Unknown names fall back to `warn`.
    pub level: String,
    /// Name for `named` loggers.
    pub name: Option<String>,
    /// Line pattern for `pattern` loggers.
    pub pattern: Option<String>,
    /// Wrap the logger in ANSI colors.
    pub colored: bool,
    /// Extra caller frames to skip when resolving `{file}`, `{line}` and `{function}`.
    pub caller_skip: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            kind: "simple".to_string(),
            level: "info".to_string(),
            name: None,
            pattern: None,
            colored: false,
            caller_skip: 0,
        }
    }
}

/// Where lines go.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout`, `stderr`, `discard` or `file`.
    pub target: String,
    /// Log file for the `file` target. `~` is expanded.
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
        }
    }
}
