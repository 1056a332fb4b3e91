//! TOML configuration for the root logger.
//!
//! ```toml
//! [logger]
//! kind = "pattern"
//! level = "debug"
//! pattern = "{timestamp} {file}:{line} [{level}] - {message}\n"
//! colored = true
//!
//! [output]
//! target = "file"
//! path = "~/.local/state/myapp/app.log"
//! ```

mod structs;

pub use structs::{LoggerConfig, OutputConfig};

use crate::internal;
use crate::level::Level;
use crate::logger::{Logger, LoggerBuilder};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "ABCLOG_CONFIG";
/// Overrides `logger.level`.
pub const LEVEL_ENV: &str = "ABCLOG_LEVEL";

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads the config from `$ABCLOG_CONFIG` or the platform config
    /// directory, then applies environment overrides. A missing file yields
    /// the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env();
        Ok(config)
    }

    /// Loads from an explicit path without environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(format_args!(
                "Config file {} not found, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::debug(format_args!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `$ABCLOG_CONFIG` if set, else `<config dir>/abclog/config.toml`.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigDirNotFound`] when no home directory is known.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(&path).as_ref()));
        }

        directories::ProjectDirs::from("", "", "abclog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Applies `$ABCLOG_LEVEL` on top of the file's level.
    pub fn apply_env(&mut self) {
        if let Ok(level) = std::env::var(LEVEL_ENV)
            && !level.is_empty()
        {
            internal::debug(format_args!("Level overridden by {LEVEL_ENV}: {level}"));
            self.logger.level = level;
        }
    }

    /// Lenient: an unknown level name becomes [`Level::Warn`].
    #[must_use]
    pub fn parse_level(&self) -> Level {
        Level::parse(&self.logger.level)
    }

    /// Builds the configured logger.
    ///
    /// # Errors
    /// Fails if the log file can't be opened or the pattern doesn't compile.
    pub fn build(&self) -> Result<Arc<dyn Logger>, crate::Error> {
        LoggerBuilder::from_config(self)?.build()
    }
}
