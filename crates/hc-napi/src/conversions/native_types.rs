//! NativeValue / NativeObject → JS values.
//!
//! Builds the object property by property so that `Undefined` fields stay
//! present as `undefined` (serde_json would turn them into `null`).

use napi::{Env, JsObject, JsUnknown};

use hc_core::{NativeObject, NativeValue};

/// Map one native value onto the matching JS primitive.
pub fn native_value_to_js(env: &Env, value: &NativeValue) -> napi::Result<JsUnknown> {
    Ok(match value {
        NativeValue::String(s) => env.create_string(s)?.into_unknown(),
        NativeValue::Number(n) => env.create_double(*n)?.into_unknown(),
        NativeValue::Integer(i) => env.create_int64(*i)?.into_unknown(),
        NativeValue::Boolean(b) => env.get_boolean(*b)?.into_unknown(),
        NativeValue::Undefined => env.get_undefined()?.into_unknown(),
    })
}

/// Allocate a fresh JS object holding every property of `object`.
pub fn native_object_to_js(env: &Env, object: &NativeObject) -> napi::Result<JsObject> {
    let mut js = env.create_object()?;
    for (key, value) in object {
        js.set_named_property(key, native_value_to_js(env, value)?)?;
    }
    Ok(js)
}
