//! In-memory [`HostRegistry`] for embedders and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Dispatched, EntryPoint, HostRegistry};
use crate::errors::{HcError, HcResult};
use crate::reporter::HealthReporter;

/// Maps callable names to entry points and invokes them on demand.
#[derive(Debug)]
pub struct DispatchTable {
    reporter: Arc<HealthReporter>,
    handlers: BTreeMap<String, EntryPoint>,
}

impl DispatchTable {
    pub fn new(reporter: Arc<HealthReporter>) -> Self {
        Self {
            reporter,
            handlers: BTreeMap::new(),
        }
    }

    /// Invoke the callable registered under `name`.
    pub fn call(&self, name: &str) -> HcResult<Dispatched> {
        let entry = self
            .handlers
            .get(name)
            .copied()
            .ok_or_else(|| HcError::UnknownEntryPoint {
                name: name.to_string(),
            })?;
        Ok(entry.invoke(&self.reporter))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HostRegistry for DispatchTable {
    fn register(&mut self, name: &str, entry: EntryPoint) -> HcResult<()> {
        if self.handlers.contains_key(name) {
            return Err(HcError::DuplicateEntryPoint {
                name: name.to_string(),
            });
        }
        self.handlers.insert(name.to_string(), entry);
        Ok(())
    }
}
