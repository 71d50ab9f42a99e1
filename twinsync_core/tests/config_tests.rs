//! Config loading tests.
//!
//! `ConfigLoader` file handling: missing file, syntax errors, embedded
//! `[shared]` section with defaulted log level.

use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

use twinsync_core::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

/// Minimal application config embedding the shared section, the way the
/// monitor binary does it.
#[derive(Debug, Deserialize)]
struct AppConfig {
    shared: SharedConfig,
    address: String,
}

#[test]
fn load_valid_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("twinsync.toml");
    fs::write(
        &path,
        r#"
address = "192.168.125.1"

[shared]
log_level = "debug"
service_name = "twinsync-test-01"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.address, "192.168.125.1");
    assert_eq!(config.shared.log_level, LogLevel::Debug);
    assert!(config.shared.validate().is_ok());
}

#[test]
fn missing_file_is_file_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = AppConfig::load(&tmp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound));
}

#[test]
fn invalid_toml_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("twinsync.toml");
    fs::write(&path, "address = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn log_level_defaults_to_info() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("twinsync.toml");
    fs::write(
        &path,
        r#"
address = "192.168.125.1"

[shared]
service_name = "twinsync-test-01"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Info);
}
