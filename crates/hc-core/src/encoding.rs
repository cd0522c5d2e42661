//! JSON encoding that never fails the caller.

use serde::Serialize;
use tracing::warn;

use crate::constants::JSON_FALLBACK;

/// Encode `value` as compact JSON, or return [`JSON_FALLBACK`] if encoding
/// fails. The health transport must always hand back a parseable string.
pub fn encode_or_fallback<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "health payload encoding failed, returning fallback");
            JSON_FALLBACK.to_string()
        }
    }
}
