//! All NAPI-exported functions, grouped by domain.

pub mod health;
pub mod lifecycle;
