//! # hc-core
//!
//! Host-independent core of the hc health-check module.
//! Builds the health record, encodes it for hosts, and registers the two
//! health entry points into whatever registry the host provides.

pub mod config;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod lifecycle;
pub mod models;
pub mod registry;
pub mod reporter;
pub mod runtime_slot;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::HcConfig;
pub use errors::{HcError, HcResult};
pub use models::{HealthRecord, NativeObject, NativeValue};
pub use registry::{DispatchTable, Dispatched, EntryPoint, HostRegistry};
pub use reporter::HealthReporter;
pub use runtime_slot::RuntimeSlot;
