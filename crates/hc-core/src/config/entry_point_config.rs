use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{HcError, HcResult};

/// Names under which the two health callables are registered in the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryPointConfig {
    /// Callable returning the JSON-string form.
    pub json: String,
    /// Callable returning the native-object form.
    pub object: String,
}

impl EntryPointConfig {
    pub fn validate(&self) -> HcResult<()> {
        super::require_non_empty("entry_points.json", &self.json)?;
        super::require_non_empty("entry_points.object", &self.object)?;
        if self.json == self.object {
            return Err(HcError::ConfigError(format!(
                "entry_points.json and entry_points.object must differ (both are '{}')",
                self.json
            )));
        }
        Ok(())
    }
}

impl Default for EntryPointConfig {
    fn default() -> Self {
        Self {
            json: constants::DEFAULT_JSON_ENTRY_POINT.to_string(),
            object: constants::DEFAULT_OBJECT_ENTRY_POINT.to_string(),
        }
    }
}
