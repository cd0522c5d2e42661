//! Rust → JS conversions and error mapping.

pub mod error_types;
pub mod native_types;
