//! TOML configuration for the reporter constants and entry-point names.

pub mod entry_point_config;
pub mod reporter_config;

pub use entry_point_config::EntryPointConfig;
pub use reporter_config::ReporterConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{HcError, HcResult};

/// Root configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HcConfig {
    pub reporter: ReporterConfig,
    pub entry_points: EntryPointConfig,
}

impl HcConfig {
    /// Parse and validate a TOML document. An empty string yields defaults.
    pub fn from_toml(toml_str: &str) -> HcResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the host could not register or report.
    pub fn validate(&self) -> HcResult<()> {
        self.reporter.validate()?;
        self.entry_points.validate()
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> HcResult<()> {
    if value.trim().is_empty() {
        return Err(HcError::ConfigError(format!("{field} must not be empty")));
    }
    Ok(())
}
