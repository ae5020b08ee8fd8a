use crate::sql::base::metadata::column::ColumnMetadata;
use model::core::{native_type::NativeType, schema_type::SchemaType};
use tracing::warn;

/// Type name the driver reports for local-time-zone timestamps.
pub const LOCAL_TIMEZONE_TYPE_NAME: &str = "TIMESTAMPLTZ";

/// `TIMESTAMPLTZ` columns arrive with the TIMESTAMP code but carry an offset.
pub fn is_local_timezone_type(type_name: &str) -> bool {
    type_name.trim().eq_ignore_ascii_case(LOCAL_TIMEZONE_TYPE_NAME)
}

/// Resolves the native type of a column, correcting the driver's misreports.
///
/// Unknown type codes are logged and treated as VARCHAR so discovery never fails.
pub fn resolve_native_type(column: &ColumnMetadata) -> NativeType {
    if is_local_timezone_type(&column.type_name) {
        return NativeType::TimestampWithTimezone;
    }

    match NativeType::from_code(column.type_code) {
        Ok(native_type) => native_type,
        Err(_) => {
            warn!(
                "Could not convert column {} with type {} ({}). Casting to VARCHAR.",
                column.qualified_name(),
                column.type_code,
                column.type_name
            );
            NativeType::VarChar
        }
    }
}

pub fn to_schema_type(native_type: NativeType) -> SchemaType {
    use NativeType::*;
    match native_type {
        Bit | Boolean => SchemaType::Boolean,
        Real | Float | Double | Numeric | Decimal => SchemaType::Number,
        TinyInt | SmallInt | Integer | BigInt => SchemaType::Integer,
        Char | NChar | NVarChar | VarChar | LongVarChar => SchemaType::String,
        Date => SchemaType::StringDate,
        Time => SchemaType::StringTimeWithoutTimezone,
        Timestamp => SchemaType::StringTimestampWithoutTimezone,
        TimestampWithTimezone => SchemaType::StringTimestampWithTimezone,
        TimeWithTimezone => SchemaType::StringTimeWithTimezone,
        Blob | Binary | VarBinary | LongVarBinary => SchemaType::StringBase64,
        Array => SchemaType::Array,
        _ => SchemaType::String,
    }
}
