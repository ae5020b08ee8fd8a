pub mod base;
pub mod snowflake;
