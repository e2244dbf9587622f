//! Behaviour-driven tests for configuration loading.

use std::str::FromStr;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use tinywot::{Binding, Operation};

use crate::{Config, ConfigError};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

struct TestWorld {
    dir: TempDir,
    lines: Vec<String>,
    result: Option<Result<Config, ConfigError>>,
    accepted: usize,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temporary directory"),
            lines: Vec::new(),
            result: None,
            accepted: 0,
        }
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

fn loaded(world: &TestWorld) -> &Config {
    world
        .result
        .as_ref()
        .expect("configuration not loaded")
        .as_ref()
        .expect("configuration failed to load")
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a configuration file setting {key} to {value}")]
fn given_setting(world: &mut TestWorld, key: String, value: String) {
    world.lines.push(format!("{key} = {value}"));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the configuration file is loaded")]
fn when_loaded(world: &mut TestWorld) {
    let path = Utf8PathBuf::from_path_buf(world.dir.path().join("tinywot.toml"))
        .expect("UTF-8 path");
    std::fs::write(&path, world.lines.join("\n")).expect("write config");
    world.result = Some(Config::load(&path));
}

#[when("a thing is built with {count} stub bindings")]
fn when_thing_built(world: &mut TestWorld, count: usize) {
    let mut thing = loaded(world).new_thing();
    world.accepted = (0..count)
        .map(|index| thing.add(Binding::stub(format!("/slot/{index}"), Operation::ReadProperty)))
        .filter(Result::is_ok)
        .count();
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the binding capacity is {expected}")]
fn then_capacity(world: &mut TestWorld, expected: usize) {
    assert_eq!(loaded(world).binding_capacity(), expected);
}

#[then("the log format is {expected}")]
fn then_format(world: &mut TestWorld, expected: QuotedString) {
    assert_eq!(loaded(world).log_format().to_string(), expected.as_str());
}

#[then("the log filter is {expected}")]
fn then_filter(world: &mut TestWorld, expected: QuotedString) {
    assert_eq!(loaded(world).log_filter(), expected.as_str());
}

#[then("loading fails with a parse error")]
fn then_parse_error(world: &mut TestWorld) {
    let result = world.result.as_ref().expect("configuration not loaded");
    assert!(
        matches!(result, Err(ConfigError::Parse { .. })),
        "unexpected result: {result:?}"
    );
}

#[then("{count} bindings were accepted")]
fn then_accepted(world: &mut TestWorld, count: usize) {
    assert_eq!(world.accepted, count);
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/config.feature",
    name = "Missing keys take their defaults"
)]
fn missing_keys(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Log format is read from the file"
)]
fn log_format_from_file(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Unknown keys are rejected"
)]
fn unknown_keys(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config.feature",
    name = "Configured capacity bounds the binding table"
)]
fn capacity_bounds_table(world: TestWorld) {
    let _ = world;
}
