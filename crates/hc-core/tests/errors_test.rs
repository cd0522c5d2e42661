use hc_core::errors::error_code::{self, HcErrorCode};
use hc_core::errors::*;

#[test]
fn duplicate_entry_point_carries_name() {
    let err = HcError::DuplicateEntryPoint {
        name: "getHealthCheck".into(),
    };
    assert!(err.to_string().contains("getHealthCheck"));
    assert_eq!(err.error_code(), error_code::DUPLICATE_ENTRY_POINT);
}

#[test]
fn napi_string_prefixes_code() {
    let err = HcError::ConfigError("bad".into());
    assert_eq!(err.napi_string(), "[CONFIG_ERROR] configuration error: bad");
}

#[test]
fn toml_errors_report_as_config_errors() {
    let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
    let err: HcError = toml_err.into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn serde_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: HcError = json_err.into();
    assert_eq!(err.error_code(), error_code::SERIALIZATION_ERROR);
}

#[test]
fn already_initialized_code() {
    assert_eq!(
        HcError::AlreadyInitialized.napi_string(),
        "[ALREADY_INITIALIZED] runtime already initialized"
    );
}
