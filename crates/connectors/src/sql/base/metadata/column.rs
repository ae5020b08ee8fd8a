use serde::{Deserialize, Serialize};

/// Result-set column metadata as reported by the driver.
///
/// `type_code` is the generic SQL type code and `type_name` the engine's own name
/// for the type. The two can disagree, see [`crate::sql::snowflake::data_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub type_code: i32,
    pub type_name: String,
    pub schema: String,
    pub table: String,
}

impl ColumnMetadata {
    pub fn new(
        name: impl Into<String>,
        type_code: i32,
        type_name: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_code,
            type_name: type_name.into(),
            schema: schema.into(),
            table: table.into(),
        }
    }

    /// Fully qualified `schema.table.column` name, for diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.schema, self.table, self.name)
    }
}
