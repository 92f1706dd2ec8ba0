//! Deserializers for fields the API sends with inconsistent JSON types.
//! A `null` or a value of the wrong shape decodes to the field's default
//! so one untidy record never fails a whole list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `5`, `5.5`, `"5"` or `null`; anything unparseable becomes `None`
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text field: numbers and booleans are rendered, `null` is empty
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text).unwrap_or_default())
}

/// Flag field: `true`, `"true"` or a non-zero number; everything else is false
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

/// List of text: a lone scalar becomes a one-element list, `null` is empty
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// List of nested values; entries that do not decode are dropped
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Any value that falls back to its default when it is `null` or malformed
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Render a number the way a person typed it: `5` rather than `5.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "number")]
        years: Option<f64>,
    }

    fn years(json: &str) -> Option<f64> {
        serde_json::from_str::<Row>(json).unwrap().years
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Loose {
        #[serde(deserialize_with = "string")]
        phone: String,
        #[serde(deserialize_with = "flag")]
        visible: bool,
        #[serde(deserialize_with = "strings")]
        tags: Vec<String>,
        #[serde(deserialize_with = "list")]
        pairs: Vec<(u8, u8)>,
        #[serde(deserialize_with = "or_default")]
        level: u8,
    }

    fn loose(json: &str) -> Loose {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_variants() {
        assert_eq!(years(r#"{"years": 5}"#), Some(5.0));
        assert_eq!(years(r#"{"years": "7"}"#), Some(7.0));
        assert_eq!(years(r#"{"years": "n/a"}"#), None);
        assert_eq!(years(r#"{"years": null}"#), None);
        assert_eq!(years(r#"{}"#), None);
    }

    #[test]
    fn test_nulls_become_defaults() {
        let row = loose(r#"{"phone": null, "visible": null, "tags": null, "pairs": null, "level": null}"#);
        assert_eq!(row.phone, "");
        assert!(!row.visible);
        assert!(row.tags.is_empty());
        assert!(row.pairs.is_empty());
        assert_eq!(row.level, 0);
    }

    #[test]
    fn test_wrong_types_are_coerced() {
        let row = loose(
            r#"{"phone": 771234567, "visible": "true", "tags": ["HVAC", 3, null], "pairs": [[1, 2], "x"], "level": "high"}"#,
        );
        assert_eq!(row.phone, "771234567");
        assert!(row.visible);
        assert_eq!(row.tags, vec!["HVAC", "3"]);
        assert_eq!(row.pairs, vec![(1, 2)]);
        assert_eq!(row.level, 0);
        assert_eq!(loose(r#"{"tags": "Plumbing"}"#).tags, vec!["Plumbing"]);
        assert!(!loose(r#"{"visible": 0}"#).visible);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
    }
}
