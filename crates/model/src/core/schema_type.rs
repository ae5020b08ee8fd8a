use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Portable column types exposed to catalog builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Boolean,
    Number,
    Integer,
    String,
    StringDate,
    StringTimeWithoutTimezone,
    StringTimeWithTimezone,
    StringTimestampWithoutTimezone,
    StringTimestampWithTimezone,
    #[serde(rename = "STRING_BASE64")]
    StringBase64,
    Array,
}

impl SchemaType {
    /// JSON-schema fragment describing a property of this type.
    pub fn to_json_schema(&self) -> Value {
        match self {
            SchemaType::Boolean => json!({ "type": "boolean" }),
            SchemaType::Number => json!({ "type": "number" }),
            SchemaType::Integer => json!({ "type": "integer" }),
            SchemaType::String => json!({ "type": "string" }),
            SchemaType::StringDate => json!({ "type": "string", "format": "date" }),
            SchemaType::StringTimeWithoutTimezone => json!({
                "type": "string",
                "format": "time",
                "airbyte_type": "time_without_timezone"
            }),
            SchemaType::StringTimeWithTimezone => json!({
                "type": "string",
                "format": "time",
                "airbyte_type": "time_with_timezone"
            }),
            SchemaType::StringTimestampWithoutTimezone => json!({
                "type": "string",
                "format": "date-time",
                "airbyte_type": "timestamp_without_timezone"
            }),
            SchemaType::StringTimestampWithTimezone => json!({
                "type": "string",
                "format": "date-time",
                "airbyte_type": "timestamp_with_timezone"
            }),
            SchemaType::StringBase64 => json!({ "type": "string", "contentEncoding": "base64" }),
            SchemaType::Array => json!({ "type": "array" }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::Boolean => "BOOLEAN",
            SchemaType::Number => "NUMBER",
            SchemaType::Integer => "INTEGER",
            SchemaType::String => "STRING",
            SchemaType::StringDate => "STRING_DATE",
            SchemaType::StringTimeWithoutTimezone => "STRING_TIME_WITHOUT_TIMEZONE",
            SchemaType::StringTimeWithTimezone => "STRING_TIME_WITH_TIMEZONE",
            SchemaType::StringTimestampWithoutTimezone => "STRING_TIMESTAMP_WITHOUT_TIMEZONE",
            SchemaType::StringTimestampWithTimezone => "STRING_TIMESTAMP_WITH_TIMEZONE",
            SchemaType::StringBase64 => "STRING_BASE64",
            SchemaType::Array => "ARRAY",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_for_temporal_types() {
        assert_eq!(
            SchemaType::StringDate.to_json_schema(),
            json!({ "type": "string", "format": "date" })
        );
        assert_eq!(
            SchemaType::StringTimestampWithTimezone.to_json_schema()["airbyte_type"],
            "timestamp_with_timezone"
        );
        assert_eq!(
            SchemaType::StringBase64.to_json_schema()["contentEncoding"],
            "base64"
        );
    }

    #[test]
    fn test_serde_matches_display() {
        for tag in [
            SchemaType::StringBase64,
            SchemaType::StringTimeWithoutTimezone,
            SchemaType::Integer,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
        }
    }
}
