use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the API (the `_id` field of every record)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(#[serde(deserialize_with = "super::lenient::string")] pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Records created locally have no id until the API assigns one
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::new("65a1f0");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"65a1f0\"");
        let back: RecordId = serde_json::from_str("\"65a1f0\"").unwrap();
        assert_eq!(back, id);
        let numeric: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric.as_str(), "42");
    }

    #[test]
    fn test_blank_id_is_empty() {
        assert!(RecordId::default().is_empty());
        assert!(RecordId::new("  ").is_empty());
        assert!(!RecordId::new("x1").is_empty());
    }
}
