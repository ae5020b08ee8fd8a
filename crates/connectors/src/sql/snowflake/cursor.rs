use crate::sql::base::{
    cursor::{self as base, CursorTypes},
    error::DbError,
    params::{ParamStatement, SqlParam},
    temporal,
};
use lazy_static::lazy_static;
use model::core::native_type::NativeType;
use std::{collections::HashSet, sync::Arc};

lazy_static! {
    /// Cursor types Snowflake allows on top of the base set.
    pub static ref EXTRA_ALLOWED_CURSOR_TYPES: HashSet<NativeType> =
        [NativeType::TimeWithTimezone, NativeType::TimestampWithTimezone]
            .into_iter()
            .collect();

    static ref DEFAULT_CURSOR_TYPES: Arc<CursorTypes> =
        Arc::new(CursorTypes::new(EXTRA_ALLOWED_CURSOR_TYPES.iter().copied()));
}

pub fn default_cursor_types() -> Arc<CursorTypes> {
    Arc::clone(&DEFAULT_CURSOR_TYPES)
}

/// Binds a cursor boundary literal.
///
/// Offset-qualified literals bind as generic objects and fall back to their naive form.
/// DATE binds as a native date while TIMESTAMP is handed over as a string for the server
/// to parse. Everything else goes through the base binder.
pub fn set_cursor_field(
    statement: &mut dyn ParamStatement,
    index: usize,
    native_type: NativeType,
    value: &str,
) -> Result<(), DbError> {
    let param = match native_type {
        NativeType::TimeWithTimezone => SqlParam::Object(
            temporal::parse_offset_or_naive_time(value)
                .map_err(DbError::cursor_parse(native_type, value))?,
        ),
        NativeType::TimestampWithTimezone => SqlParam::Object(
            temporal::parse_offset_or_naive_timestamp(value)
                .map_err(DbError::cursor_parse(native_type, value))?,
        ),
        NativeType::Date => SqlParam::Date(
            temporal::parse_date(value).map_err(DbError::cursor_parse(native_type, value))?,
        ),
        NativeType::Timestamp => SqlParam::String(value.to_string()),
        _ => return base::set_cursor_field(statement, index, native_type, value),
    };

    statement.bind(index, param)
}
