use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::HcResult;

/// The two process-wide constants carried by every health record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Build identifier, e.g. "1.0.5".
    pub version: String,
    /// Implementation tag, e.g. "rust-napi".
    pub source: String,
}

impl ReporterConfig {
    pub fn validate(&self) -> HcResult<()> {
        super::require_non_empty("reporter.version", &self.version)?;
        super::require_non_empty("reporter.source", &self.source)
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            version: constants::VERSION.to_string(),
            source: constants::SOURCE.to_string(),
        }
    }
}
