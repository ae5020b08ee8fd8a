use crate::sql::base::{
    error::DbError,
    extract::ExtractorTable,
    row::ResultRow,
    temporal,
};
use model::{core::native_type::NativeType, records::record::Record};
use tracing::debug;

/// Generic extractors with the Snowflake overrides installed.
pub fn extractors() -> ExtractorTable {
    use NativeType::*;

    ExtractorTable::generic()
        .with(&[Float, Double], put_double)
        .with(&[BigInt], put_big_number)
        .with(&[Time], put_time)
}

/// Unreadable doubles are written as null instead of failing the row.
pub fn put_double(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    match row.try_get_f64(index) {
        Some(value) => record.put_f64(name, value),
        None => {
            debug!("Column {} could not be read as a double, writing null", name);
            record.put_null(name);
        }
    }
    Ok(())
}

/// BIGINT columns are read at arbitrary precision; unreadable values become null.
pub fn put_big_number(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    match row.try_get_decimal(index) {
        Some(value) => record.put_decimal_literal(name, &value.to_string()),
        None => {
            debug!("Column {} could not be read as a number, writing null", name);
            record.put_null(name);
        }
    }
    Ok(())
}

/// The driver's time accessor drops fractional seconds, so the value is read as a
/// timestamp and only its time component is kept.
pub fn put_time(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    let timestamp = row.get_timestamp(index)?;
    record.put(name, temporal::format_time(timestamp.time()));
    Ok(())
}
