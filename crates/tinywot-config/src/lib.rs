//! Configuration and telemetry for hosts embedding the `tinywot` dispatcher.
//!
//! [`Config`] is read from a TOML file with every key optional:
//!
//! ```toml
//! binding_capacity = 16
//! log_filter = "info,tinywot::dispatch=debug"
//! log_format = "compact"
//! ```
//!
//! [`telemetry::initialise`] installs the global `tracing` subscriber that
//! receives the dispatcher's `tinywot::dispatch` and `tinywot::thing` events.

mod config;
mod defaults;
mod logging;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use self::config::{Config, ConfigError};
pub use self::defaults::{DEFAULT_BINDING_CAPACITY, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT};
pub use self::logging::{LogFormat, LogFormatParseError};
