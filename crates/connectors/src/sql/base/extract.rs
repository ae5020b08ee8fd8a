//! Generic per-type extraction of row values into a [`Record`].
//!
//! Extraction is table driven: every native type maps to an [`Extractor`] and anything
//! without an entry falls back to reading the column as a string. Sources build their
//! own table by starting from [`ExtractorTable::generic`] and overriding entries.

use super::{error::DbError, row::ResultRow, temporal};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use model::{core::native_type::NativeType, records::record::Record};
use serde_json::Value;
use std::collections::HashMap;

/// Writes the value of column `index` into `record` under `name`.
pub type Extractor = fn(&dyn ResultRow, usize, &str, &mut Record) -> Result<(), DbError>;

#[derive(Clone)]
pub struct ExtractorTable {
    entries: HashMap<NativeType, Extractor>,
    fallback: Extractor,
}

impl ExtractorTable {
    /// Extractors used by every source unless overridden.
    pub fn generic() -> Self {
        use NativeType::*;

        let table = Self {
            entries: HashMap::new(),
            fallback: put_default,
        };

        table
            .with(&[Bit, Boolean], put_boolean)
            .with(&[TinyInt, SmallInt], put_short_int)
            .with(&[Integer], put_integer)
            .with(&[BigInt], put_big_int)
            .with(&[Float, Double], put_double)
            .with(&[Real], put_float)
            .with(&[Numeric, Decimal], put_big_decimal)
            .with(&[Char, VarChar, LongVarChar], put_string)
            .with(&[Date], put_date)
            .with(&[Time], put_time)
            .with(&[Timestamp], put_timestamp)
            .with(&[TimeWithTimezone], put_time_with_timezone)
            .with(&[TimestampWithTimezone], put_timestamp_with_timezone)
            .with(&[Blob, Binary, VarBinary, LongVarBinary], put_binary)
            .with(&[Array], put_array)
    }

    /// Installs `extractor` for each of `types`, replacing existing entries.
    pub fn with(mut self, types: &[NativeType], extractor: Extractor) -> Self {
        for native_type in types {
            self.entries.insert(*native_type, extractor);
        }
        self
    }

    /// Extractor for `native_type`; unknown types (`None`) use the fallback.
    pub fn get(&self, native_type: Option<NativeType>) -> Extractor {
        native_type
            .and_then(|t| self.entries.get(&t).copied())
            .unwrap_or(self.fallback)
    }
}

impl Default for ExtractorTable {
    fn default() -> Self {
        Self::generic()
    }
}

pub fn put_boolean(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_bool(index)?);
    Ok(())
}

pub fn put_short_int(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_i16(index)?);
    Ok(())
}

pub fn put_integer(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_i32(index)?);
    Ok(())
}

pub fn put_big_int(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_i64(index)?);
    Ok(())
}

pub fn put_double(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put_f64(name, row.get_f64(index)?);
    Ok(())
}

pub fn put_float(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    let value = row.get_f32(index)?;
    // Widening to f64 would print the binary expansion (1.1 -> 1.100000023841858).
    if value.is_finite() {
        record.put_decimal_literal(name, &value.to_string());
    } else {
        record.put_null(name);
    }
    Ok(())
}

/// Arbitrary-precision decimal; unreadable values become null.
pub fn put_big_decimal(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    match row.try_get_decimal(index) {
        Some(value) => record.put_decimal_literal(name, &value.to_string()),
        None => record.put_null(name),
    }
    Ok(())
}

pub fn put_string(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_string(index)?);
    Ok(())
}

pub fn put_date(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, temporal::format_date(row.get_date(index)?));
    Ok(())
}

pub fn put_time(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, temporal::format_time(row.get_time(index)?));
    Ok(())
}

pub fn put_timestamp(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, temporal::format_timestamp(row.get_timestamp(index)?));
    Ok(())
}

pub fn put_time_with_timezone(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, temporal::format_time_tz(row.get_time_tz(index)?));
    Ok(())
}

pub fn put_timestamp_with_timezone(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(
        name,
        temporal::format_timestamp_tz(row.get_timestamp_tz(index)?),
    );
    Ok(())
}

pub fn put_binary(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, BASE64.encode(row.get_bytes(index)?));
    Ok(())
}

pub fn put_array(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    let items = row
        .get_array(index)?
        .into_iter()
        .map(Value::String)
        .collect::<Vec<_>>();
    record.put(name, Value::Array(items));
    Ok(())
}

pub fn put_default(
    row: &dyn ResultRow,
    index: usize,
    name: &str,
    record: &mut Record,
) -> Result<(), DbError> {
    record.put(name, row.get_string(index)?);
    Ok(())
}
