//! HcRuntime — singleton in a `RuntimeSlot`, immutable after initialization.
//!
//! The entry points resolve the runtime on every call, so `hcInitialize()`
//! may run any time before the runtime is first used. A health call or
//! `registerGlobals()` without an explicit initialization pins the defaults
//! for the rest of the process; `hcRuntimeInfo()` only peeks.

use std::sync::Arc;

use hc_core::{HcConfig, HcResult, HealthReporter, RuntimeSlot};

use crate::conversions::error_types;

static RUNTIME: RuntimeSlot<HcRuntime> = RuntimeSlot::new();

/// Process-wide configuration and the reporter built from it.
#[derive(Debug)]
pub struct HcRuntime {
    pub config: HcConfig,
    pub reporter: Arc<HealthReporter>,
}

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
}

impl HcRuntime {
    fn new(opts: RuntimeOptions) -> HcResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => HcConfig::from_toml(toml_str)?,
            None => HcConfig::default(),
        };
        Ok(Self::from_config(config))
    }

    fn from_config(config: HcConfig) -> Self {
        let reporter = Arc::new(HealthReporter::from_config(&config.reporter));
        Self { config, reporter }
    }
}

/// Initialize the global runtime.
///
/// Returns an error if already initialized, explicitly or by first use.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    let runtime = HcRuntime::new(opts).map_err(error_types::to_napi_error)?;
    RUNTIME
        .initialize(runtime)
        .map_err(error_types::to_napi_error)?;
    tracing::info!("hc runtime initialized");
    Ok(())
}

/// Get the global runtime, initializing it with defaults on first use.
pub fn get() -> Arc<HcRuntime> {
    RUNTIME.get_or_init(|| HcRuntime::from_config(HcConfig::default()))
}

/// The runtime if it exists, without initializing it.
pub fn peek() -> Option<Arc<HcRuntime>> {
    RUNTIME.peek()
}

/// Check if the runtime has been initialized, explicitly or by first use.
pub fn is_initialized() -> bool {
    RUNTIME.is_initialized()
}

/// Check if `hcInitialize()` supplied the runtime.
pub fn is_explicitly_initialized() -> bool {
    RUNTIME.is_explicitly_initialized()
}
