use hc_core::config::*;
use hc_core::HcError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = HcConfig::from_toml("").unwrap();
    assert_eq!(config.reporter.version, "1.0.5");
    assert_eq!(config.reporter.source, "rust-napi");
    assert_eq!(config.entry_points.json, "getHealthCheck");
    assert_eq!(config.entry_points.object, "getHealthObject");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[reporter]
source = "edge-function"

[entry_points]
object = "getHealth"
"#;
    let config = HcConfig::from_toml(toml).unwrap();
    assert_eq!(config.reporter.source, "edge-function");
    assert_eq!(config.entry_points.object, "getHealth");
    // Non-overridden fields keep defaults
    assert_eq!(config.reporter.version, "1.0.5");
    assert_eq!(config.entry_points.json, "getHealthCheck");
}

#[test]
fn config_serde_roundtrip() {
    let config = HcConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert_eq!(HcConfig::from_toml(&toml_str).unwrap(), config);
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let err = HcConfig::from_toml("[reporter\nversion = ").unwrap_err();
    assert!(matches!(err, HcError::TomlError(_)));
}

#[test]
fn empty_version_is_rejected() {
    let err = HcConfig::from_toml("[reporter]\nversion = \"  \"").unwrap_err();
    assert!(err.to_string().contains("reporter.version"));
}

#[test]
fn identical_entry_point_names_are_rejected() {
    let toml = r#"
[entry_points]
json = "health"
object = "health"
"#;
    let err = HcConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, HcError::ConfigError(msg) if msg.contains("health")));
}
