//! Configuration Tests.
//!
//! JSON defaults, overrides, file loading and validation.

use std::io::Write;

use bpsim_core::common::ConfigError;
use bpsim_core::config::Config;
use rstest::rstest;

#[test]
fn default_config_is_canonical() {
    let config = Config::default();
    assert_eq!(config.predictor.table_size, 65536);
    assert!(!config.report.detailed);
    assert_eq!(config.report.label, "2-bit saturating counter");
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.predictor.table_size, 65536);
    assert_eq!(config.report.label, "2-bit saturating counter");
}

#[test]
fn partial_sections_fill_defaults() {
    let config = Config::from_json(r#"{ "report": { "label": "bimodal" } }"#).unwrap();
    assert_eq!(config.predictor.table_size, 65536);
    assert!(!config.report.detailed);
    assert_eq!(config.report.label, "bimodal");
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(1000)]
fn rejects_non_power_of_two(#[case] size: usize) {
    let json = format!(r#"{{ "predictor": {{ "table_size": {size} }} }}"#);
    let err = Config::from_json(&json).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTableSize(s) if s == size));
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(4096)]
fn accepts_power_of_two(#[case] size: usize) {
    let json = format!(r#"{{ "predictor": {{ "table_size": {size} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().predictor.table_size, size);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Config::from_json("{ predictor: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "predictor": { "table_size": 1024 }, "report": { "detailed": true } }"#)
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.predictor.table_size, 1024);
    assert!(config.report.detailed);
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
