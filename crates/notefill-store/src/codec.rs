//! Encoding of annotation values into wire update fragments.
//!
//! One total pure function per field kind. These produce the value side of
//! the `properties` map sent to the update endpoint; the pipeline picks the
//! function via [`update_fragment`] based on the workflow's field mapping.

use serde_json::{json, Value as JsonValue};

use notefill_core::FieldKind;

/// Rich-text fragment for a free-text field.
pub fn text(value: &str) -> JsonValue {
    json!({
        "rich_text": [
            {"text": {"content": value}}
        ]
    })
}

/// Single-select fragment.
pub fn single_choice(value: &str) -> JsonValue {
    json!({"select": {"name": value.trim()}})
}

/// Multi-select fragment from a comma-separated string.
///
/// Entries are trimmed, empties dropped, and duplicates collapsed by name
/// with first-seen order preserved.
pub fn multi_choice(value: &str) -> JsonValue {
    let mut seen = Vec::new();
    for entry in value.split(',') {
        let name = entry.trim();
        if name.is_empty() || seen.iter().any(|s| s == name) {
            continue;
        }
        seen.push(name.to_string());
    }
    let tags: Vec<JsonValue> = seen.iter().map(|name| json!({"name": name})).collect();
    json!({"multi_select": tags})
}

/// Number fragment.
pub fn number(value: f64) -> JsonValue {
    json!({"number": value})
}

/// Dispatch an annotation value to the codec for the target field kind.
///
/// Returns `None` when the value's JSON type does not match the kind; the
/// schema validator rejects such batches before the pipeline gets here, so
/// a `None` at update time means a mapping points at the wrong result key.
pub fn update_fragment(kind: FieldKind, value: &JsonValue) -> Option<JsonValue> {
    match kind {
        FieldKind::Text => value.as_str().map(text),
        FieldKind::SingleChoice => value.as_str().map(single_choice),
        FieldKind::MultiChoice => value.as_str().map(multi_choice),
        FieldKind::Number => value.as_f64().map(number),
    }
}
