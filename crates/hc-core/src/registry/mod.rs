//! Host registry seam: hosts implement [`HostRegistry`], startup calls
//! [`register_entry_points`] against it.

pub mod dispatch;

pub use dispatch::DispatchTable;

use tracing::debug;

use crate::config::EntryPointConfig;
use crate::errors::HcResult;
use crate::models::NativeObject;
use crate::reporter::HealthReporter;

/// The two kinds of health callables a host can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// Zero-argument callable returning the JSON-string form.
    HealthJson,
    /// Zero-argument callable returning the native-object form.
    HealthObject,
}

impl EntryPoint {
    /// Run the callable against `reporter`.
    pub fn invoke(self, reporter: &HealthReporter) -> Dispatched {
        match self {
            EntryPoint::HealthJson => Dispatched::Json(reporter.health_json()),
            EntryPoint::HealthObject => Dispatched::Object(reporter.health_object()),
        }
    }
}

/// Result of invoking an entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    Json(String),
    Object(NativeObject),
}

/// A host-side table of named callables.
///
/// Implementations must reject a name that is already bound with
/// [`crate::HcError::DuplicateEntryPoint`].
pub trait HostRegistry {
    fn register(&mut self, name: &str, entry: EntryPoint) -> HcResult<()>;
}

/// Register both health callables under the configured names.
pub fn register_entry_points<R: HostRegistry + ?Sized>(
    registry: &mut R,
    names: &EntryPointConfig,
) -> HcResult<()> {
    names.validate()?;
    for (name, entry) in [
        (names.json.as_str(), EntryPoint::HealthJson),
        (names.object.as_str(), EntryPoint::HealthObject),
    ] {
        registry.register(name, entry)?;
        debug!(name, ?entry, "registered health entry point");
    }
    Ok(())
}
