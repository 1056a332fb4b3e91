//! Logger construction from [`Config`].

use super::{LoggerBuilder, LoggerKind};
use crate::config::{Config, OutputConfig};
use crate::fmt::Pattern;
use crate::internal;
use crate::output::{Console, Discard, FileSink, Sink};
use std::sync::Arc;

const DEFAULT_NAME: &str = "main";

impl LoggerBuilder {
    /// Prepares a builder from a loaded config. Opens the log file if the
    /// output target is `file`.
    ///
    /// Unknown `kind` or `target` values are reported through the internal
    /// logger and replaced with `simple` and `stdout`.
    ///
    /// # Errors
    /// Fails if the `file` target has no path or the file can't be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let logger = &config.logger;
        internal::debug(format_args!(
            "Building {} logger at level {}",
            logger.kind, logger.level
        ));

        let kind = match logger.kind.to_lowercase().as_str() {
            "simple" => LoggerKind::Simple,
            "named" => LoggerKind::Named(
                logger
                    .name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            ),
            "pattern" => LoggerKind::Pattern(
                logger
                    .pattern
                    .clone()
                    .unwrap_or_else(|| Pattern::DEFAULT.to_string()),
            ),
            other => {
                internal::warn(format_args!("Unknown logger kind '{other}', using simple"));
                LoggerKind::Simple
            }
        };

        Ok(Self::new()
            .kind(kind)
            .level(config.parse_level())
            .caller_skip(logger.caller_skip)
            .colored(logger.colored)
            .shared_sink(resolve_sink(&config.output)?))
    }
}

fn resolve_sink(output: &OutputConfig) -> Result<Arc<dyn Sink>, crate::Error> {
    let sink: Arc<dyn Sink> = match output.target.to_lowercase().as_str() {
        "stdout" => Arc::new(Console::stdout()),
        "stderr" => Arc::new(Console::stderr()),
        "discard" => Arc::new(Discard),
        "file" => {
            let Some(path) = output.path.as_deref() else {
                return Err(crate::Error::InvalidPath(
                    "output.target = \"file\" requires output.path".to_string(),
                ));
            };
            Arc::new(FileSink::open(path)?)
        }
        other => {
            internal::warn(format_args!("Unknown output target '{other}', using stdout"));
            Arc::new(Console::stdout())
        }
    };
    Ok(sink)
}
