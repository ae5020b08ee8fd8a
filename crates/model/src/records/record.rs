use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One scanned row as an ordered document of column name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn put_null(&mut self, name: &str) {
        self.fields.insert(name.to_string(), Value::Null);
    }

    /// Writes a float, or null when it has no JSON representation (NaN, infinities).
    pub fn put_f64(&mut self, name: &str, value: f64) {
        let value = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.fields.insert(name.to_string(), value);
    }

    /// Writes an already-formatted decimal literal as a JSON number without going through f64.
    pub fn put_decimal_literal(&mut self, name: &str, literal: &str) {
        let value = literal
            .parse::<Number>()
            .map_or_else(|_| Value::String(literal.to_string()), Value::Number);
        self.fields.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_keep_insertion_order() {
        let mut record = Record::new();
        record.put("zeta", 1);
        record.put("alpha", "a");
        record.put_null("mid");

        assert_eq!(record.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"zeta":1,"alpha":"a","mid":null}"#
        );
    }

    #[test]
    fn test_put_f64_non_finite_is_null() {
        let mut record = Record::new();
        record.put_f64("x", f64::NAN);
        record.put_f64("y", 2.5);
        assert_eq!(record.get("x"), Some(&Value::Null));
        assert_eq!(record.get("y"), Some(&json!(2.5)));
    }

    #[test]
    fn test_put_decimal_literal_keeps_digits() {
        let mut record = Record::new();
        record.put_decimal_literal("big", "12345678901234567890.123456789");
        assert_eq!(
            record.into_json().to_string(),
            r#"{"big":12345678901234567890.123456789}"#
        );
    }
}
