//! [`HealthReporter`] builds health records and renders them for hosts.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::ReporterConfig;
use crate::constants;
use crate::encoding;
use crate::models::{to_native, HealthRecord, NativeObject};

/// Produces [`HealthRecord`]s carrying a fixed version and source tag.
///
/// ```
/// use hc_core::HealthReporter;
///
/// let reporter = HealthReporter::new("1.0.5", "rust-napi");
/// let record = reporter.build_record();
/// assert_eq!(record.status, "healthy");
/// assert_eq!(record.version, "1.0.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReporter {
    version: String,
    source: String,
}

impl HealthReporter {
    pub fn new(version: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            source: source.into(),
        }
    }

    pub fn from_config(config: &ReporterConfig) -> Self {
        Self::new(config.version.clone(), config.source.clone())
    }

    /// Build a record stamped with the current wall-clock time.
    pub fn build_record(&self) -> HealthRecord {
        self.build_record_at(Utc::now())
    }

    /// Build a record stamped with `now` (second precision, `Z` offset).
    pub fn build_record_at(&self, now: DateTime<Utc>) -> HealthRecord {
        HealthRecord {
            status: constants::STATUS_HEALTHY.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            version: self.version.clone(),
            source: self.source.clone(),
        }
    }

    /// Encode a record as JSON, falling back to [`constants::JSON_FALLBACK`].
    pub fn serialize_to_json(record: &HealthRecord) -> String {
        encoding::encode_or_fallback(record)
    }

    /// Convert a record into a host object with the same keys and values.
    pub fn expose_as_native_object(record: &HealthRecord) -> NativeObject {
        record
            .fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), to_native(&value)))
            .collect()
    }

    /// What the JSON entry point returns: a fresh record, encoded.
    pub fn health_json(&self) -> String {
        Self::serialize_to_json(&self.build_record())
    }

    /// What the object entry point returns: a fresh record, as a host object.
    pub fn health_object(&self) -> NativeObject {
        Self::expose_as_native_object(&self.build_record())
    }
}

impl Default for HealthReporter {
    fn default() -> Self {
        Self::from_config(&ReporterConfig::default())
    }
}
