//! The fixed four-field health payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Health payload handed to the host on every call.
///
/// All four fields are strings. A record is built per call and dropped once
/// the host has read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthRecord {
    /// Always "healthy".
    pub status: String,
    /// RFC 3339 UTC timestamp taken when the record was built.
    pub timestamp: String,
    /// Build identifier.
    pub version: String,
    /// Implementation tag.
    pub source: String,
}

impl HealthRecord {
    /// Field names in declaration order.
    pub const FIELD_NAMES: [&'static str; 4] = ["status", "timestamp", "version", "source"];

    /// The record as `(name, value)` pairs, ready for conversion into a host
    /// object.
    pub fn fields(&self) -> [(&'static str, Value); 4] {
        [
            ("status", Value::String(self.status.clone())),
            ("timestamp", Value::String(self.timestamp.clone())),
            ("version", Value::String(self.version.clone())),
            ("source", Value::String(self.source.clone())),
        ]
    }
}
