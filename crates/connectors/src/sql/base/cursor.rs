//! Cursor column eligibility and binding of cursor boundary literals.

use super::{
    error::DbError,
    params::{ParamStatement, SqlParam},
    temporal::{self, TemporalValue},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use bigdecimal::{BigDecimal, ToPrimitive};
use lazy_static::lazy_static;
use model::core::native_type::NativeType;
use std::{collections::HashSet, str::FromStr};

lazy_static! {
    /// Types any source may use as an incremental cursor.
    pub static ref ALLOWED_CURSOR_TYPES: HashSet<NativeType> = {
        use NativeType::*;
        [
            Timestamp,
            Time,
            Date,
            TinyInt,
            SmallInt,
            Integer,
            BigInt,
            Float,
            Double,
            Real,
            Numeric,
            Decimal,
            NVarChar,
            VarChar,
            LongVarChar,
        ]
        .into_iter()
        .collect()
    };
}

pub fn is_base_cursor_type(native_type: NativeType) -> bool {
    ALLOWED_CURSOR_TYPES.contains(&native_type)
}

/// Immutable set of cursor types a source allows on top of [`ALLOWED_CURSOR_TYPES`].
///
/// Built once at startup and shared (behind an `Arc`) by every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorTypes {
    extra: HashSet<NativeType>,
}

impl CursorTypes {
    pub fn new(extra: impl IntoIterator<Item = NativeType>) -> Self {
        Self {
            extra: extra.into_iter().collect(),
        }
    }

    pub fn allows(&self, native_type: NativeType) -> bool {
        is_base_cursor_type(native_type) || self.extra.contains(&native_type)
    }
}

/// Binds `value` at `index` using the generic conversion for `native_type`.
pub fn set_cursor_field(
    statement: &mut dyn ParamStatement,
    index: usize,
    native_type: NativeType,
    value: &str,
) -> Result<(), DbError> {
    use NativeType::*;

    let param = match native_type {
        Timestamp => SqlParam::Object(TemporalValue::Timestamp(
            temporal::parse_timestamp(value).map_err(DbError::cursor_parse(native_type, value))?,
        )),
        TimestampWithTimezone => SqlParam::Object(TemporalValue::OffsetTimestamp(
            temporal::parse_offset_timestamp(value)
                .map_err(DbError::cursor_parse(native_type, value))?,
        )),
        Time => SqlParam::Object(TemporalValue::Time(
            temporal::parse_time(value).map_err(DbError::cursor_parse(native_type, value))?,
        )),
        TimeWithTimezone => SqlParam::Object(TemporalValue::OffsetTime(
            temporal::parse_offset_time(value)
                .map_err(DbError::cursor_parse(native_type, value))?,
        )),
        Date => SqlParam::Object(TemporalValue::Date(
            temporal::parse_date(value).map_err(DbError::cursor_parse(native_type, value))?,
        )),
        Bit | Boolean => SqlParam::Boolean(value.trim().eq_ignore_ascii_case("true")),
        TinyInt | SmallInt => SqlParam::SmallInt(
            value
                .trim()
                .parse()
                .map_err(DbError::invalid_cursor(native_type, value))?,
        ),
        Integer => SqlParam::Int(
            value
                .trim()
                .parse()
                .map_err(DbError::invalid_cursor(native_type, value))?,
        ),
        BigInt => SqlParam::BigInt(parse_big_integer(native_type, value)?),
        Float | Double => SqlParam::Double(
            value
                .trim()
                .parse()
                .map_err(DbError::invalid_cursor(native_type, value))?,
        ),
        Real => SqlParam::Real(
            value
                .trim()
                .parse()
                .map_err(DbError::invalid_cursor(native_type, value))?,
        ),
        Numeric | Decimal => SqlParam::Decimal(
            BigDecimal::from_str(value.trim())
                .map_err(DbError::invalid_cursor(native_type, value))?,
        ),
        Char | NChar | NVarChar | VarChar | LongVarChar => SqlParam::String(value.to_string()),
        Binary | Blob => SqlParam::Bytes(BASE64.decode(value)?),
        other => return Err(DbError::UnsupportedCursorType(other)),
    };

    statement.bind(index, param)
}

/// Accepts decimal notation and truncates toward zero, e.g. `"42.9"` binds as 42.
fn parse_big_integer(native_type: NativeType, value: &str) -> Result<i64, DbError> {
    let decimal =
        BigDecimal::from_str(value.trim()).map_err(DbError::invalid_cursor(native_type, value))?;
    decimal
        .with_scale(0)
        .to_i64()
        .ok_or_else(|| DbError::InvalidCursorValue {
            native_type,
            value: value.to_string(),
            message: "out of range for a 64-bit integer".to_string(),
        })
}
