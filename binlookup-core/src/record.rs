//! BIN record type
//!
//! A record is one element of the data file's top-level array, kept as raw
//! JSON. Only the `number` field of an object is read by the lookup; every
//! other field, and every non-object entry, is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field holding the BIN digits
pub const NUMBER_FIELD: &str = "number";

/// A single issuer record as stored in the data file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinRecord(Value);

impl BinRecord {
    /// Create a record from its JSON fields
    pub fn new(fields: Map<String, Value>) -> Self {
        BinRecord(Value::Object(fields))
    }

    /// The BIN digit sequence, if present and a string
    pub fn number(&self) -> Option<&str> {
        self.0.get(NUMBER_FIELD).and_then(Value::as_str)
    }

    /// Check whether `number` starts with `prefix`
    ///
    /// Records without a string `number` never match.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.number()
            .map(|number| number.starts_with(prefix))
            .unwrap_or(false)
    }

    /// Get a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields in stored order, if the entry is an object
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Whether the entry is a JSON object
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> BinRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_field() {
        let rec = record(json!({"number": "411111", "issuer": "BankA"}));
        assert_eq!(rec.number(), Some("411111"));
        assert_eq!(rec.get("issuer"), Some(&json!("BankA")));
    }

    #[test]
    fn test_non_string_number_never_matches() {
        let rec = record(json!({"number": 411111}));
        assert_eq!(rec.number(), None);
        assert!(!rec.matches_prefix("411111"));
    }

    #[test]
    fn test_missing_number_never_matches() {
        let rec = record(json!({"issuer": "BankA"}));
        assert!(!rec.matches_prefix("411111"));
    }

    #[test]
    fn test_non_object_entries_never_match() {
        for value in [json!(null), json!("411111"), json!(411111), json!(["411111"])] {
            let rec = record(value.clone());
            assert!(!rec.is_object());
            assert_eq!(rec.fields(), None);
            assert!(!rec.matches_prefix("411111"), "{} matched", value);
        }
    }

    #[test]
    fn test_prefix_is_case_sensitive_and_exact() {
        let rec = record(json!({"number": "4111 11ab"}));
        assert!(rec.matches_prefix("4111 11"));
        assert!(!rec.matches_prefix("411111"));
        assert!(!rec.matches_prefix("4111 11AB"));
    }

    #[test]
    fn test_serializes_fields_verbatim() {
        let value = json!({"number": "522222", "scheme": "mastercard", "extra": {"a": [1, 2]}});
        let rec = record(value.clone());
        assert_eq!(serde_json::to_value(&rec).unwrap(), value);
        assert_eq!(
            rec.fields().unwrap().keys().collect::<Vec<_>>(),
            vec!["number", "scheme", "extra"]
        );
    }
}
