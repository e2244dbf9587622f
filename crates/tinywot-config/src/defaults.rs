//! Default values applied to keys missing from a configuration file.

use crate::logging::LogFormat;

/// Number of slots reserved in a growable binding table.
pub const DEFAULT_BINDING_CAPACITY: usize = 16;

/// Log filter directive used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log format used when none is configured.
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Json;
