use std::io::Write;

use privatas_core::config::*;
use privatas_core::errors::ConfigError;
use privatas_core::SanitizationMode;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PrivatasConfig::from_toml("").unwrap();

    assert_eq!(config.sanitizer.default_mode, SanitizationMode::Redact);
    assert!(config.drafts.confirm_manual_overwrite);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[sanitizer]
default_mode = "tokenize"

[observability]
log_level = "debug"
"#;
    let config = PrivatasConfig::from_toml(toml).unwrap();
    assert_eq!(config.sanitizer.default_mode, SanitizationMode::Tokenize);
    assert_eq!(config.observability.log_level, "debug");
    // Non-overridden fields keep defaults
    assert!(config.observability.json);
    assert!(config.drafts.confirm_manual_overwrite);
}

#[test]
fn legacy_mask_mode_loads_as_redact() {
    let config = PrivatasConfig::from_toml("[sanitizer]\ndefault_mode = \"mask\"\n").unwrap();
    assert_eq!(config.sanitizer.default_mode, SanitizationMode::Redact);
}

#[test]
fn unknown_mode_is_a_parse_error() {
    let err = PrivatasConfig::from_toml("[sanitizer]\ndefault_mode = \"shred\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = PrivatasConfig::default();
    config.sanitizer.default_mode = SanitizationMode::Delete;
    config.drafts.confirm_manual_overwrite = false;

    let serialized = config.to_toml().unwrap();
    let parsed = PrivatasConfig::from_toml(&serialized).unwrap();
    assert_eq!(parsed.sanitizer.default_mode, SanitizationMode::Delete);
    assert!(!parsed.drafts.confirm_manual_overwrite);
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[drafts]\nconfirm_manual_overwrite = false").unwrap();

    let config = PrivatasConfig::load(file.path()).unwrap();
    assert!(!config.drafts.confirm_manual_overwrite);
    assert_eq!(config.sanitizer.default_mode, SanitizationMode::Redact);
}

#[test]
fn missing_config_file_reports_path() {
    let err = PrivatasConfig::load("/definitely/not/here/privatas.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.contains("privatas.toml")),
        other => panic!("expected Io error, got {other:?}"),
    }
}
