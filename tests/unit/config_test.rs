//! Unit tests for configuration module

use finance_data_api::config::{LogFormat, Settings};
use std::io::Write;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.database.uri, "mongodb://localhost:27017/");
    assert_eq!(settings.database.name, "expenseDB");
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn test_settings_validation_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_empty_database_name() {
    let mut settings = Settings::default();
    settings.database.name = "  ".to_string();

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_empty_uri() {
    let mut settings = Settings::default();
    settings.database.uri = String::new();

    assert!(settings.validate().is_err());
}

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "server:\n  port: 8123\ndatabase:\n  name: \"financeTest\"\nlogging:\n  format: \"pretty\""
    )
    .unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();

    assert_eq!(settings.server.port, 8123);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.database.name, "financeTest");
    assert_eq!(settings.database.uri, "mongodb://localhost:27017/");
    assert_eq!(settings.logging.format, LogFormat::Pretty);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from_path(dir.path().join("absent.yaml")).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.database.name, "expenseDB");
}

#[test]
fn test_load_rejects_unknown_log_format() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "logging:\n  format: \"xml\"").unwrap();

    assert!(Settings::load_from_path(file.path()).is_err());
}

#[test]
fn test_bind_address() {
    let mut settings = Settings::default();
    settings.server.host = "127.0.0.1".to_string();
    settings.server.port = 5050;

    assert_eq!(settings.bind_address(), "127.0.0.1:5050");
}
