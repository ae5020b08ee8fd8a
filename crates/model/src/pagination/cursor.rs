use crate::core::native_type::NativeType;
use serde::{Deserialize, Serialize};

/// Last-seen value of the cursor column, as persisted between incremental syncs.
///
/// The value is kept as the literal string that was written to the record so that it
/// can be re-bound verbatim into the next window's predicate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CursorBoundary {
    pub native_type: NativeType,
    pub value: String,
}

impl CursorBoundary {
    pub fn new(native_type: NativeType, value: impl Into<String>) -> Self {
        Self {
            native_type,
            value: value.into(),
        }
    }
}
