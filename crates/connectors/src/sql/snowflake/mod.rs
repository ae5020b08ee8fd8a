//! Snowflake flavour of the source operations.
//!
//! The driver reports `TIMESTAMP_LTZ` columns with the plain TIMESTAMP code, reads TIME
//! columns at second precision, and its BIGINT/double accessors choke on some values. The
//! overrides in this module correct for all of that on top of the generic base layer.

pub mod config;
pub mod cursor;
pub mod data_type;
pub mod extract;
pub mod operations;

pub use config::OperationsConfig;
pub use operations::SnowflakeSourceOperations;
