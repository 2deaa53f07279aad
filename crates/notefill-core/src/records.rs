//! Record and field-value models.
//!
//! A `Record` mirrors one page in the remote store: an opaque id plus a map
//! from field display name to a tagged `FieldValue`. Emptiness is defined
//! per field kind so eligibility can be decided without knowing the kind up
//! front: empty text has no content after trimming, an unset choice is
//! `None`, an empty multi-choice has no tags, an absent number is `None`.
//! An absent field counts as empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fallback display name for records whose name field is itself empty.
pub const UNTITLED: &str = "Untitled";

/// Storage kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (title or rich text on the wire).
    Text,
    /// Single select.
    SingleChoice,
    /// Multi select.
    MultiChoice,
    /// Numeric.
    Number,
}

/// One field's value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    SingleChoice(Option<String>),
    MultiChoice(Vec<String>),
    Number(Option<f64>),
}

impl FieldValue {
    /// Kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::SingleChoice(_) => FieldKind::SingleChoice,
            FieldValue::MultiChoice(_) => FieldKind::MultiChoice,
            FieldValue::Number(_) => FieldKind::Number,
        }
    }

    /// Kind-specific emptiness rule.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::SingleChoice(c) => c.is_none(),
            FieldValue::MultiChoice(tags) => tags.is_empty(),
            FieldValue::Number(n) => n.is_none(),
        }
    }
}

/// One record from the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Remote page id. Opaque; only ever echoed back on updates.
    pub id: String,
    /// Field display name to value.
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Create a record with no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a field (builder style, used heavily in tests).
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Look up a field by display name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// True when the named field is absent or empty per its kind.
    pub fn field_is_empty(&self, name: &str) -> bool {
        self.field(name).map_or(true, FieldValue::is_empty)
    }

    /// Display name from the given name field, falling back to [`UNTITLED`].
    pub fn display_name(&self, name_field: &str) -> String {
        match self.field(name_field) {
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => UNTITLED.to_string(),
        }
    }
}

/// True iff at least one required field is empty (short-circuit OR).
///
/// Pure predicate over the record; an absent field counts as empty.
pub fn is_eligible(record: &Record, required_fields: &[String]) -> bool {
    required_fields
        .iter()
        .any(|name| record.field_is_empty(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> Record {
        Record::new("r1")
            .with_field("Name", FieldValue::Text("Carbonara".to_string()))
            .with_field(
                "Cuisine",
                FieldValue::SingleChoice(Some("Italian".to_string())),
            )
            .with_field(
                "Tags",
                FieldValue::MultiChoice(vec!["pasta".to_string(), "quick".to_string()]),
            )
            .with_field("Servings", FieldValue::Number(Some(4.0)))
    }

    #[test]
    fn test_text_emptiness() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::Text("   ".to_string()).is_empty());
        assert!(!FieldValue::Text("x".to_string()).is_empty());
    }

    #[test]
    fn test_single_choice_emptiness() {
        assert!(FieldValue::SingleChoice(None).is_empty());
        assert!(!FieldValue::SingleChoice(Some("a".to_string())).is_empty());
    }

    #[test]
    fn test_multi_choice_emptiness() {
        assert!(FieldValue::MultiChoice(vec![]).is_empty());
        assert!(!FieldValue::MultiChoice(vec!["a".to_string()]).is_empty());
    }

    #[test]
    fn test_number_emptiness() {
        assert!(FieldValue::Number(None).is_empty());
        assert!(!FieldValue::Number(Some(0.0)).is_empty());
    }

    #[test]
    fn test_absent_field_counts_as_empty() {
        let record = Record::new("r1");
        assert!(record.field_is_empty("Anything"));
    }

    #[test]
    fn test_eligible_when_one_required_field_empty() {
        let record = full_record().with_field("Notes", FieldValue::Text(String::new()));
        let required = vec!["Name".to_string(), "Notes".to_string()];
        assert!(is_eligible(&record, &required));
    }

    #[test]
    fn test_not_eligible_when_all_required_fields_full() {
        let record = full_record();
        let required = vec![
            "Name".to_string(),
            "Cuisine".to_string(),
            "Tags".to_string(),
            "Servings".to_string(),
        ];
        assert!(!is_eligible(&record, &required));
    }

    #[test]
    fn test_eligible_on_absent_required_field() {
        let record = full_record();
        let required = vec!["Ingredients".to_string()];
        assert!(is_eligible(&record, &required));
    }

    #[test]
    fn test_not_eligible_with_no_required_fields() {
        assert!(!is_eligible(&full_record(), &[]));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(full_record().display_name("Name"), "Carbonara");
    }

    #[test]
    fn test_display_name_fallback() {
        let record = Record::new("r1").with_field("Name", FieldValue::Text("  ".to_string()));
        assert_eq!(record.display_name("Name"), UNTITLED);
        assert_eq!(Record::new("r2").display_name("Name"), UNTITLED);
    }

    #[test]
    fn test_display_name_trims() {
        let record = Record::new("r1").with_field("Name", FieldValue::Text(" Oslo ".to_string()));
        assert_eq!(record.display_name("Name"), "Oslo");
    }

    #[test]
    fn test_field_value_kind() {
        assert_eq!(FieldValue::Text(String::new()).kind(), FieldKind::Text);
        assert_eq!(
            FieldValue::SingleChoice(None).kind(),
            FieldKind::SingleChoice
        );
        assert_eq!(FieldValue::MultiChoice(vec![]).kind(), FieldKind::MultiChoice);
        assert_eq!(FieldValue::Number(None).kind(), FieldKind::Number);
    }
}
