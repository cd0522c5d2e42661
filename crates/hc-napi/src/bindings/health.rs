//! Health bindings: the body behind both registered callables, plus
//! hcRuntimeInfo.

use napi::{Env, JsObject, JsString, JsUnknown};
use napi_derive::napi;
use serde_json::json;

use hc_core::{Dispatched, EntryPoint};

use crate::conversions::native_types;
use crate::runtime;

/// Run `entry` against the runtime's reporter and hand the result to JS.
pub fn invoke(env: &Env, entry: EntryPoint) -> napi::Result<JsUnknown> {
    let rt = runtime::get();
    match entry.invoke(&rt.reporter) {
        Dispatched::Json(json) => env.create_string(&json).map(JsString::into_unknown),
        Dispatched::Object(object) => {
            native_types::native_object_to_js(env, &object).map(JsObject::into_unknown)
        }
    }
}

/// Effective configuration, for inspection from JS.
///
/// Read-only: before the runtime exists this reports the defaults it would
/// start with, and `hcInitialize()` can still be called afterwards.
#[napi]
pub fn hc_runtime_info() -> napi::Result<serde_json::Value> {
    let config = runtime::peek()
        .map(|rt| rt.config.clone())
        .unwrap_or_default();
    let config = serde_json::to_value(&config)
        .map_err(|e| napi::Error::from_reason(format!("Failed to serialize config: {e}")))?;
    Ok(json!({
        "config": config,
        "initialized": runtime::is_initialized(),
        "explicitlyInitialized": runtime::is_explicitly_initialized(),
    }))
}
