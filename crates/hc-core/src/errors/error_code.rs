//! HcErrorCode trait for NAPI conversion.

/// Maps an error to the code string the TypeScript side parses from
/// `[ERROR_CODE] message`.
pub trait HcErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn napi_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const DUPLICATE_ENTRY_POINT: &str = "DUPLICATE_ENTRY_POINT";
pub const UNKNOWN_ENTRY_POINT: &str = "UNKNOWN_ENTRY_POINT";
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const HOST_ERROR: &str = "HOST_ERROR";
