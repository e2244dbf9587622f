//! Tests for `Config` parsing and defaults.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tinywot::{Binding, Operation, ThingError};

use crate::{Config, ConfigError, DEFAULT_BINDING_CAPACITY, LogFormat};

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("temporary directory")
}

fn config_path(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("tinywot.toml")).expect("UTF-8 path")
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.binding_capacity(), DEFAULT_BINDING_CAPACITY);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_format(), LogFormat::Json);
}

#[test]
fn empty_text_yields_defaults() {
    let config = Config::from_toml_str("").expect("empty config parses");
    assert_eq!(config, Config::default());
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_every_key() {
    let config = Config::from_toml_str(
        "binding_capacity = 3\nlog_filter = \"tinywot=debug\"\nlog_format = \"compact\"\n",
    )
    .expect("valid config");
    assert_eq!(config.binding_capacity(), 3);
    assert_eq!(config.log_filter(), "tinywot=debug");
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[rstest]
#[case::unknown_key("capacity = 3")]
#[case::wrong_type("binding_capacity = \"many\"")]
#[case::negative("binding_capacity = -1")]
#[case::unknown_format("log_format = \"pretty\"")]
#[case::malformed("binding_capacity =")]
fn rejects_invalid_text(#[case] text: &str) {
    let error = Config::from_toml_str(text).expect_err("invalid config");
    assert!(
        matches!(&error, ConfigError::Parse { origin, .. } if origin == "<inline>"),
        "unexpected error: {error}"
    );
}

#[test]
fn builders_override_single_fields() {
    let config = Config::default()
        .with_binding_capacity(1)
        .with_log_filter("warn")
        .with_log_format(LogFormat::Compact);
    assert_eq!(config.binding_capacity(), 1);
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[rstest]
#[case::lower("json", LogFormat::Json)]
#[case::upper("COMPACT", LogFormat::Compact)]
fn log_format_parses_case_insensitively(#[case] text: &str, #[case] expected: LogFormat) {
    assert_eq!(text.parse::<LogFormat>().expect("known format"), expected);
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[rstest]
fn loads_from_file(temp_dir: TempDir) {
    let path = config_path(&temp_dir);
    std::fs::write(&path, "binding_capacity = 8\n").expect("write config");
    let config = Config::load(&path).expect("config loads");
    assert_eq!(config.binding_capacity(), 8);
}

#[rstest]
fn parse_errors_name_the_file(temp_dir: TempDir) {
    let path = config_path(&temp_dir);
    std::fs::write(&path, "log_format = 1\n").expect("write config");
    let error = Config::load(&path).expect_err("invalid config");
    assert!(
        error.to_string().contains(path.as_str()),
        "expected path in message: {error}"
    );
}

#[rstest]
fn missing_file_is_a_read_error(temp_dir: TempDir) {
    let path = config_path(&temp_dir);
    let error = Config::load(&path).expect_err("file is missing");
    assert!(matches!(error, ConfigError::Read { .. }), "unexpected error: {error}");
}

#[rstest]
fn missing_file_falls_back_to_defaults(temp_dir: TempDir) {
    let path = config_path(&temp_dir);
    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config, Config::default());
}

#[rstest]
fn load_or_default_still_reports_parse_errors(temp_dir: TempDir) {
    let path = config_path(&temp_dir);
    std::fs::write(&path, "unknown = true\n").expect("write config");
    assert!(matches!(
        Config::load_or_default(&path),
        Err(ConfigError::Parse { .. })
    ));
}

// ---------------------------------------------------------------------------
// Binding tables
// ---------------------------------------------------------------------------

#[test]
fn new_thing_uses_configured_capacity() {
    let config = Config::default().with_binding_capacity(1);
    let mut thing = config.new_thing();
    assert_eq!(thing.capacity(), 1);
    assert!(thing.is_empty());
    thing
        .add(Binding::stub("/a", Operation::ReadProperty))
        .expect("first binding fits");
    assert_eq!(
        thing.add(Binding::stub("/b", Operation::ReadProperty)),
        Err(ThingError::NotEnoughMemory)
    );
}
