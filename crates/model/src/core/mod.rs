pub mod native_type;
pub mod schema_type;
