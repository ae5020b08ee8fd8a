use crate::sql::base::cursor::CursorTypes;
use model::core::native_type::NativeType;
use serde::Deserialize;

use super::cursor::EXTRA_ALLOWED_CURSOR_TYPES;

/// Tunables for [`super::SnowflakeSourceOperations`], loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    /// Native type names allowed as cursors on top of the base set and the time zone
    /// types Snowflake always accepts.
    pub extra_cursor_types: Vec<NativeType>,
}

impl OperationsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn cursor_types(&self) -> CursorTypes {
        CursorTypes::new(
            EXTRA_ALLOWED_CURSOR_TYPES
                .iter()
                .chain(&self.extra_cursor_types)
                .copied(),
        )
    }
}
