use model::core::native_type::NativeType;
use thiserror::Error;

/// All errors coming from the row accessor, statement binding and cursor layers.
#[derive(Debug, Error)]
pub enum DbError {
    /// The driver failed to produce a value for a column.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Column index out of bounds for the current row.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// The stored value could not be read as the requested type.
    #[error("Type conversion error in column {column}: {message}")]
    TypeConversion { column: String, message: String },

    /// A temporal cursor literal matched none of the accepted formats.
    #[error("Cannot parse cursor value '{value}' as {native_type}: {source}")]
    CursorParse {
        native_type: NativeType,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A non-temporal cursor literal is malformed.
    #[error("Invalid {native_type} cursor value '{value}': {message}")]
    InvalidCursorValue {
        native_type: NativeType,
        value: String,
        message: String,
    },

    #[error("{0} cannot be used as a cursor")]
    UnsupportedCursorType(NativeType),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl DbError {
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver(message.into())
    }

    pub fn type_conversion(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeConversion {
            column: column.into(),
            message: message.into(),
        }
    }

    pub(crate) fn cursor_parse(
        native_type: NativeType,
        value: &str,
    ) -> impl FnOnce(chrono::ParseError) -> Self {
        move |source| Self::CursorParse {
            native_type,
            value: value.to_string(),
            source,
        }
    }

    pub(crate) fn invalid_cursor<E: std::fmt::Display>(
        native_type: NativeType,
        value: &str,
    ) -> impl FnOnce(E) -> Self {
        move |err| Self::InvalidCursorValue {
            native_type,
            value: value.to_string(),
            message: err.to_string(),
        }
    }
}
