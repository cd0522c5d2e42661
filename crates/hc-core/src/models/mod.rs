pub mod health_record;
pub mod native_value;

pub use health_record::HealthRecord;
pub use native_value::{to_native, NativeObject, NativeValue};
