use super::{config::OperationsConfig, cursor, data_type, extract};
use crate::sql::base::{
    cursor::CursorTypes,
    error::DbError,
    extract::{ExtractorTable, put_timestamp_with_timezone},
    metadata::column::ColumnMetadata,
    params::ParamStatement,
    row::ResultRow,
    source::SourceOperations,
};
use model::{
    core::{native_type::NativeType, schema_type::SchemaType},
    records::record::Record,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SnowflakeSourceOperations {
    extractors: ExtractorTable,
    cursor_types: Arc<CursorTypes>,
}

impl SnowflakeSourceOperations {
    pub fn new() -> Self {
        Self::with_cursor_types(cursor::default_cursor_types())
    }

    pub fn from_config(config: &OperationsConfig) -> Self {
        Self::with_cursor_types(Arc::new(config.cursor_types()))
    }

    /// Shares an already-built cursor type set between several sources.
    pub fn with_cursor_types(cursor_types: Arc<CursorTypes>) -> Self {
        Self {
            extractors: extract::extractors(),
            cursor_types,
        }
    }

    pub fn cursor_types(&self) -> &Arc<CursorTypes> {
        &self.cursor_types
    }
}

impl Default for SnowflakeSourceOperations {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceOperations for SnowflakeSourceOperations {
    fn database_field_type(&self, column: &ColumnMetadata) -> NativeType {
        data_type::resolve_native_type(column)
    }

    fn schema_type(&self, native_type: NativeType) -> SchemaType {
        data_type::to_schema_type(native_type)
    }

    fn copy_to_record(
        &self,
        row: &dyn ResultRow,
        index: usize,
        record: &mut Record,
    ) -> Result<(), DbError> {
        let column = row.column(index)?;

        if data_type::is_local_timezone_type(&column.type_name) {
            return put_timestamp_with_timezone(row, index, &column.name, record);
        }

        let extractor = self
            .extractors
            .get(NativeType::from_code(column.type_code).ok());
        extractor(row, index, &column.name, record)
    }

    /// The time zone types stay eligible whatever set was configured, since the binder
    /// always handles them.
    fn is_cursor_type(&self, native_type: NativeType) -> bool {
        cursor::EXTRA_ALLOWED_CURSOR_TYPES.contains(&native_type)
            || self.cursor_types.allows(native_type)
    }

    fn set_cursor_field(
        &self,
        statement: &mut dyn ParamStatement,
        index: usize,
        native_type: NativeType,
        value: &str,
    ) -> Result<(), DbError> {
        cursor::set_cursor_field(statement, index, native_type, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::base::{
        params::SqlParam,
        testing::{Cell, MemoryRow, RecordingStatement},
    };
    use chrono::{FixedOffset, TimeZone};
    use model::pagination::cursor::CursorBoundary;
    use serde_json::json;

    fn events_row() -> MemoryRow {
        let created_at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .unwrap();
        MemoryRow::new()
            .with("id", 4, "INTEGER", Cell::Int(1))
            .with("created_at", 93, "TIMESTAMPLTZ", Cell::TimestampTz(created_at))
            .with("note", 12, "VARCHAR", Cell::Text("hi".into()))
            .with("deleted_at", 93, "TIMESTAMPNTZ", Cell::Null)
    }

    #[test]
    fn test_local_timezone_value_keeps_offset() {
        let ops = SnowflakeSourceOperations::new();
        let mut record = Record::new();
        ops.copy_to_record(&events_row(), 1, &mut record).unwrap();
        assert_eq!(
            record.get("created_at"),
            Some(&json!("2024-03-01T08:00:00+00:00"))
        );
    }

    #[test]
    fn test_row_to_record_skips_nulls() {
        let ops = SnowflakeSourceOperations::new();
        let record = ops.row_to_record(&events_row()).unwrap();
        assert_eq!(
            record.into_json(),
            json!({"id": 1, "created_at": "2024-03-01T08:00:00+00:00", "note": "hi"})
        );
    }

    #[test]
    fn test_column_schema_types() {
        let ops = SnowflakeSourceOperations::new();
        let types = ops.column_schema_types(&events_row()).unwrap();
        assert_eq!(
            types,
            vec![
                ("id".to_string(), SchemaType::Integer),
                ("created_at".to_string(), SchemaType::StringTimestampWithTimezone),
                ("note".to_string(), SchemaType::String),
                ("deleted_at".to_string(), SchemaType::StringTimestampWithoutTimezone),
            ]
        );
    }

    #[test]
    fn test_unknown_code_reads_as_string() {
        let ops = SnowflakeSourceOperations::new();
        let row = MemoryRow::new().with("v", -155, "VECTOR", Cell::Text("[1,2]".into()));
        let mut record = Record::new();
        ops.copy_to_record(&row, 0, &mut record).unwrap();
        assert_eq!(record.get("v"), Some(&json!("[1,2]")));
    }

    #[test]
    fn test_cursor_types_are_shared() {
        let shared = Arc::new(CursorTypes::new([NativeType::Boolean]));
        let first = SnowflakeSourceOperations::with_cursor_types(Arc::clone(&shared));
        let second = SnowflakeSourceOperations::with_cursor_types(Arc::clone(&shared));

        assert!(Arc::ptr_eq(first.cursor_types(), second.cursor_types()));
        assert!(first.is_cursor_type(NativeType::Boolean));
        assert!(first.is_cursor_type(NativeType::TimeWithTimezone));
        assert!(first.is_cursor_type(NativeType::TimestampWithTimezone));
        assert!(!first.is_cursor_type(NativeType::Blob));
    }

    #[test]
    fn test_from_config_keeps_timezone_types() {
        let config = OperationsConfig {
            extra_cursor_types: vec![NativeType::Boolean],
        };
        let ops = SnowflakeSourceOperations::from_config(&config);
        assert!(ops.is_cursor_type(NativeType::Boolean));
        assert!(ops.is_cursor_type(NativeType::TimeWithTimezone));
        assert!(ops.is_cursor_type(NativeType::TimestampWithTimezone));
        assert!(ops.is_cursor_type(NativeType::Timestamp));

        let ops = SnowflakeSourceOperations::from_config(&OperationsConfig::default());
        assert!(ops.is_cursor_type(NativeType::TimestampWithTimezone));
        assert!(!ops.is_cursor_type(NativeType::Boolean));
    }

    #[test]
    fn test_bind_cursor_boundary() {
        let ops = SnowflakeSourceOperations::new();
        let boundary = CursorBoundary::new(NativeType::Timestamp, "2024-03-01T08:00:00");
        let mut statement = RecordingStatement::default();
        ops.bind_cursor_boundary(&mut statement, 2, &boundary).unwrap();
        assert_eq!(
            statement.param(2),
            Some(&SqlParam::String("2024-03-01T08:00:00".to_string()))
        );
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnowflakeSourceOperations>();
    }
}
