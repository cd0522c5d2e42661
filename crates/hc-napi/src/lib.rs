//! # hc-napi
//!
//! NAPI bindings loading the hc health check into Node.js.
//!
//! ## Architecture
//!
//! - `runtime` — `HcRuntime` singleton via `OnceLock` (config + reporter)
//! - `registry` — `ObjectRegistry`, the `HostRegistry` over a JS object
//!   (module exports or `globalThis`)
//! - `bindings` — module load hook and the exported lifecycle/info functions
//! - `conversions` — native value → JS value mapping, error codes

pub mod bindings;
pub mod conversions;
pub mod registry;
pub mod runtime;
