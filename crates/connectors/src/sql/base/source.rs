use crate::sql::base::{
    error::DbError, metadata::column::ColumnMetadata, params::ParamStatement, row::ResultRow,
};
use model::{
    core::{native_type::NativeType, schema_type::SchemaType},
    pagination::cursor::CursorBoundary,
    records::record::Record,
};

/// Per-source rules for reading rows and binding incremental-sync cursors.
pub trait SourceOperations: Send + Sync {
    /// True native type of a column, after correcting driver misreports.
    fn database_field_type(&self, column: &ColumnMetadata) -> NativeType;

    fn schema_type(&self, native_type: NativeType) -> SchemaType;

    /// Writes column `index` of `row` into `record`.
    fn copy_to_record(
        &self,
        row: &dyn ResultRow,
        index: usize,
        record: &mut Record,
    ) -> Result<(), DbError>;

    fn is_cursor_type(&self, native_type: NativeType) -> bool;

    fn set_cursor_field(
        &self,
        statement: &mut dyn ParamStatement,
        index: usize,
        native_type: NativeType,
        value: &str,
    ) -> Result<(), DbError>;

    /// Converts a whole row. SQL NULL columns are left out of the record.
    fn row_to_record(&self, row: &dyn ResultRow) -> Result<Record, DbError> {
        let mut record = Record::new();
        for index in 0..row.column_count() {
            if row.is_null(index)? {
                continue;
            }
            self.copy_to_record(row, index, &mut record)?;
        }
        Ok(record)
    }

    /// Column name and schema type for every column of `row`.
    fn column_schema_types(&self, row: &dyn ResultRow) -> Result<Vec<(String, SchemaType)>, DbError> {
        (0..row.column_count())
            .map(|index| {
                let column = row.column(index)?;
                let native_type = self.database_field_type(column);
                Ok((column.name.clone(), self.schema_type(native_type)))
            })
            .collect()
    }

    fn bind_cursor_boundary(
        &self,
        statement: &mut dyn ParamStatement,
        index: usize,
        boundary: &CursorBoundary,
    ) -> Result<(), DbError> {
        self.set_cursor_field(statement, index, boundary.native_type, &boundary.value)
    }
}
