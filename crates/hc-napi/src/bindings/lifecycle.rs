//! Lifecycle bindings: module load registration, hcInitialize,
//! registerGlobals.
//!
//! Node's event loop is the host loop: registration runs once while the
//! module loads, then control returns to Node, which keeps the callables
//! alive until the process exits.

use napi::{Env, JsObject};
use napi_derive::{module_exports, napi};

use hc_core::lifecycle;
use hc_core::registry::register_entry_points;
use hc_core::tracing_setup;
use hc_core::HcConfig;

use crate::conversions::error_types;
use crate::registry::ObjectRegistry;
use crate::runtime::{self, RuntimeOptions};

/// Module load hook: binds `getHealthCheck` and `getHealthObject` on the
/// module's exports.
#[module_exports]
pub fn init(mut exports: JsObject, env: Env) -> napi::Result<()> {
    tracing_setup::init_tracing();
    let mut registry = ObjectRegistry::new(&env, &mut exports);
    lifecycle::startup(&mut registry, &HcConfig::default()).map_err(error_types::to_napi_error)
}

/// Configure version, source, and global entry-point names.
///
/// Must be called before the first health call or `registerGlobals()`;
/// afterwards the defaults are pinned and this returns
/// `[ALREADY_INITIALIZED]`. `hcRuntimeInfo()` does not pin them.
#[napi]
pub fn hc_initialize(config_toml: Option<String>) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions { config_toml })
}

/// Bind both callables on `globalThis` under the configured names.
///
/// Returns the names bound. Calling it twice fails with
/// `[DUPLICATE_ENTRY_POINT]`.
#[napi]
pub fn register_globals(env: Env) -> napi::Result<Vec<String>> {
    let rt = runtime::get();
    let mut global = env.get_global()?.coerce_to_object()?;
    let mut registry = ObjectRegistry::new(&env, &mut global);
    register_entry_points(&mut registry, &rt.config.entry_points)
        .map_err(error_types::to_napi_error)?;
    tracing::info!(
        json = %rt.config.entry_points.json,
        object = %rt.config.entry_points.object,
        "health entry points bound on globalThis"
    );
    Ok(vec![
        rt.config.entry_points.json.clone(),
        rt.config.entry_points.object.clone(),
    ])
}
