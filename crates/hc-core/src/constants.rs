/// Build identifier reported in every health record.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Implementation tag reported in every health record.
pub const SOURCE: &str = "rust-napi";

/// The only status this module ever reports.
pub const STATUS_HEALTHY: &str = "healthy";

/// Default name of the callable returning the JSON-string form.
pub const DEFAULT_JSON_ENTRY_POINT: &str = "getHealthCheck";

/// Default name of the callable returning the native-object form.
pub const DEFAULT_OBJECT_ENTRY_POINT: &str = "getHealthObject";

/// Returned verbatim when the health record cannot be encoded.
///
/// The spacing after the comma is part of the contract; consumers match on it.
pub const JSON_FALLBACK: &str = r#"{"status":"error", "message":"json marshal error"}"#;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "HC_LOG";

/// Filter used when `HC_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "hc_core=info,hc_napi=info";
