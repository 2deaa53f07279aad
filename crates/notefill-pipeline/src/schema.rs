//! Structural validation of decoded generation responses.
//!
//! One reusable routine parameterized by a field-kind descriptor list,
//! invoked identically by every workflow. A failure anywhere rejects the
//! whole batch; there is no partial salvage of a malformed response.

use serde_json::{Map, Value as JsonValue};

use notefill_core::{Error, Result};

/// Primitive kind a result field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
}

/// Declares one required field of an annotation result object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: String,
    pub kind: ValueKind,
}

impl FieldSpec {
    pub fn string(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: ValueKind::String,
        }
    }

    pub fn number(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: ValueKind::Number,
        }
    }
}

fn kind_matches(kind: ValueKind, value: &JsonValue) -> bool {
    match kind {
        ValueKind::String => value.is_string(),
        ValueKind::Number => value.is_number(),
    }
}

/// Validate `{ "<items_key>": [ {..}, .. ] }` against the descriptor list.
///
/// Returns the element objects on success. `Error::ResponseShape` when the
/// items key is missing or not an array, an element is not an object, or an
/// element lacks a required field of the declared kind.
pub fn validate_items(
    value: &JsonValue,
    items_key: &str,
    schema: &[FieldSpec],
) -> Result<Vec<Map<String, JsonValue>>> {
    let items = value
        .get(items_key)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| {
            Error::ResponseShape(format!("missing or non-array key '{}'", items_key))
        })?;

    let mut validated = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or_else(|| {
            Error::ResponseShape(format!("element {} is not an object", i + 1))
        })?;
        for spec in schema {
            match obj.get(&spec.key) {
                Some(v) if kind_matches(spec.kind, v) => {}
                Some(_) => {
                    return Err(Error::ResponseShape(format!(
                        "element {} field '{}' has wrong type",
                        i + 1,
                        spec.key
                    )))
                }
                None => {
                    return Err(Error::ResponseShape(format!(
                        "element {} missing field '{}'",
                        i + 1,
                        spec.key
                    )))
                }
            }
        }
        validated.push(obj.clone());
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Vec<FieldSpec> {
        vec![FieldSpec::string("description"), FieldSpec::number("rating")]
    }

    #[test]
    fn test_valid_items() {
        let value = json!({
            "places": [
                {"description": "quiet", "rating": 4},
                {"description": "busy", "rating": 2.5, "extra": true}
            ]
        });
        let items = validate_items(&value, "places", &schema()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["description"], "quiet");
    }

    #[test]
    fn test_missing_items_key() {
        let value = json!({"other": []});
        let err = validate_items(&value, "places", &schema()).unwrap_err();
        assert!(matches!(err, Error::ResponseShape(_)));
    }

    #[test]
    fn test_items_key_not_array() {
        let value = json!({"places": {"description": "x"}});
        assert!(validate_items(&value, "places", &schema()).is_err());
    }

    #[test]
    fn test_one_bad_element_rejects_whole_batch() {
        let value = json!({
            "places": [
                {"description": "ok", "rating": 4},
                {"rating": 3}
            ]
        });
        let err = validate_items(&value, "places", &schema()).unwrap_err();
        match err {
            Error::ResponseShape(msg) => {
                assert!(msg.contains("element 2"));
                assert!(msg.contains("description"));
            }
            _ => panic!("Expected ResponseShape error"),
        }
    }

    #[test]
    fn test_wrong_primitive_kind() {
        let value = json!({
            "places": [{"description": "ok", "rating": "four"}]
        });
        let err = validate_items(&value, "places", &schema()).unwrap_err();
        assert!(err.to_string().contains("wrong type"));
    }

    #[test]
    fn test_non_object_element() {
        let value = json!({"places": ["just a string"]});
        assert!(validate_items(&value, "places", &schema()).is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let value = json!({"places": []});
        assert!(validate_items(&value, "places", &schema()).unwrap().is_empty());
    }
}
