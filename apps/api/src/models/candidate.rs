use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One applicant record as stored in the data file.
///
/// The raw JSON object is kept whole so fields the service never looks at
/// are returned exactly as they were read. Pipeline code reads fields only
/// through the typed accessors below, which define the default for a
/// missing or mistyped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(Map<String, Value>);

impl Candidate {
    /// String value of `field`, or `""` when absent, null, or not a string.
    pub fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or("")
    }

    /// Lowercased [`Candidate::text`].
    pub fn text_lower(&self, field: &str) -> String {
        self.text(field).to_lowercase()
    }

    /// Exact membership of `field` in `values`.
    /// Only string values can match; numbers, null and absence never do.
    pub fn is_one_of(&self, field: &str, values: &[String]) -> bool {
        match self.0.get(field) {
            Some(Value::String(s)) => values.iter().any(|v| v == s),
            _ => false,
        }
    }

    /// Boolean value of `field`; `None` unless it is a JSON boolean.
    pub fn flag(&self, field: &str) -> Option<bool> {
        self.0.get(field).and_then(Value::as_bool)
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }
}
