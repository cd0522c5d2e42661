//! HcError → napi::Error conversion with `[ERROR_CODE] message` strings.
//!
//! The TS client parses the code from the message prefix.

use napi::Status;

use hc_core::errors::HcErrorCode;

/// Convert any error carrying an [`HcErrorCode`] to a structured NAPI error.
pub fn to_napi_error(err: impl std::fmt::Display + HcErrorCode) -> napi::Error {
    napi::Error::new(Status::GenericFailure, err.napi_string())
}
