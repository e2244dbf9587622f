//! Unit and behaviour tests for configuration loading.

mod behaviour;
mod config_tests;
