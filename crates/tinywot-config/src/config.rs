//! Runtime configuration of a dispatcher host.

use std::fs;
use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinywot::Thing;

use crate::defaults::{DEFAULT_BINDING_CAPACITY, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT};
use crate::logging::LogFormat;

/// Origin label used in errors for configuration parsed from memory.
const INLINE_ORIGIN: &str = "<inline>";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The configuration text is not valid TOML or has unknown keys.
    #[error("invalid configuration in {origin}: {source}")]
    Parse {
        /// File path, or `<inline>` for text parsed from memory.
        origin: String,
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Settings for a host embedding the dispatcher.
///
/// Every key is optional in a configuration file; missing keys take the
/// values documented on the accessors. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    binding_capacity: usize,
    log_filter: String,
    log_format: LogFormat,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, mistyped values or
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse(text, INLINE_ORIGIN)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        parse(&text, path.as_str())
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Config::load`] except for a missing file.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Slots reserved in a growable binding table. Defaults to `16`.
    #[must_use]
    pub const fn binding_capacity(&self) -> usize {
        self.binding_capacity
    }

    /// `EnvFilter` directives for telemetry. Defaults to `"info"`.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Telemetry output format. Defaults to [`LogFormat::Json`].
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns a copy with a different binding capacity.
    #[must_use]
    pub const fn with_binding_capacity(mut self, capacity: usize) -> Self {
        self.binding_capacity = capacity;
        self
    }

    /// Returns a copy with a different log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Returns a copy with a different log format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Creates an empty growable binding table sized by
    /// [`Config::binding_capacity`].
    #[must_use]
    pub fn new_thing(&self) -> Thing {
        Thing::with_capacity(self.binding_capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binding_capacity: DEFAULT_BINDING_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: DEFAULT_LOG_FORMAT,
        }
    }
}

fn parse(text: &str, origin: &str) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_owned(),
        source: Box::new(source),
    })
}
