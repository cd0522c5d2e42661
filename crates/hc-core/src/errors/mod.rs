pub mod error_code;
pub mod hc_error;

pub use error_code::HcErrorCode;
pub use hc_error::HcError;

/// Convenience alias used throughout the workspace.
pub type HcResult<T> = Result<T, HcError>;
