//! Decoding of wire property JSON into record models.
//!
//! The query endpoint returns pages whose `properties` map tags every value
//! with a `type` discriminator. Only the four kinds the workflows use are
//! decoded (`title`/`rich_text`, `select`, `multi_select`, `number`);
//! anything else is dropped from the record, which makes it indistinguishable
//! from an empty field, and that is the safe direction for eligibility.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use notefill_core::{Block, BlockKind, Error, FieldValue, Record, Result};

/// Concatenated plain text of a rich-text span array.
fn plain_text(spans: &JsonValue) -> String {
    spans
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|span| span.get("plain_text").and_then(JsonValue::as_str))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Decode one property value by its `type` discriminator.
pub fn decode_property(prop: &JsonValue) -> Option<FieldValue> {
    let prop_type = prop.get("type").and_then(JsonValue::as_str)?;
    match prop_type {
        "title" => Some(FieldValue::Text(plain_text(prop.get("title")?))),
        "rich_text" => Some(FieldValue::Text(plain_text(prop.get("rich_text")?))),
        "select" => {
            let name = prop
                .get("select")
                .and_then(|s| s.get("name"))
                .and_then(JsonValue::as_str)
                .map(str::to_string);
            Some(FieldValue::SingleChoice(name))
        }
        "multi_select" => {
            let tags = prop
                .get("multi_select")
                .and_then(JsonValue::as_array)
                .map(|arr| {
                    arr.iter()
                        .filter_map(|t| t.get("name").and_then(JsonValue::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            Some(FieldValue::MultiChoice(tags))
        }
        "number" => Some(FieldValue::Number(
            prop.get("number").and_then(JsonValue::as_f64),
        )),
        _ => None,
    }
}

/// Decode one page from a query result into a `Record`.
pub fn decode_record(page: &JsonValue) -> Result<Record> {
    let id = page
        .get("id")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::RemoteQuery("page without id in query results".to_string()))?;

    let mut fields = HashMap::new();
    if let Some(props) = page.get("properties").and_then(JsonValue::as_object) {
        for (name, prop) in props {
            if let Some(value) = decode_property(prop) {
                fields.insert(name.clone(), value);
            }
        }
    }

    Ok(Record {
        id: id.to_string(),
        fields,
    })
}

/// Decode one block from a children listing.
pub fn decode_block(block: &JsonValue) -> Result<Block> {
    let id = block
        .get("id")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Error::RemoteQuery("block without id in children results".to_string()))?;

    let has_children = block
        .get("has_children")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);

    let kind = match block.get("type").and_then(JsonValue::as_str) {
        Some("to_do") => {
            let todo = block.get("to_do").cloned().unwrap_or(JsonValue::Null);
            BlockKind::Todo {
                text: plain_text(todo.get("rich_text").unwrap_or(&JsonValue::Null)),
                checked: todo
                    .get("checked")
                    .and_then(JsonValue::as_bool)
                    .unwrap_or(false),
            }
        }
        _ => BlockKind::Other,
    };

    Ok(Block {
        id: id.to_string(),
        kind,
        has_children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_title_property() {
        let prop = json!({
            "type": "title",
            "title": [
                {"plain_text": "Beef "},
                {"plain_text": "Rendang"}
            ]
        });
        assert_eq!(
            decode_property(&prop),
            Some(FieldValue::Text("Beef Rendang".to_string()))
        );
    }

    #[test]
    fn test_decode_rich_text_property() {
        let prop = json!({"type": "rich_text", "rich_text": []});
        assert_eq!(
            decode_property(&prop),
            Some(FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn test_decode_select_property() {
        let set = json!({"type": "select", "select": {"name": "Italian"}});
        let unset = json!({"type": "select", "select": null});
        assert_eq!(
            decode_property(&set),
            Some(FieldValue::SingleChoice(Some("Italian".to_string())))
        );
        assert_eq!(
            decode_property(&unset),
            Some(FieldValue::SingleChoice(None))
        );
    }

    #[test]
    fn test_decode_multi_select_property() {
        let prop = json!({
            "type": "multi_select",
            "multi_select": [{"name": "pasta"}, {"name": "quick"}]
        });
        assert_eq!(
            decode_property(&prop),
            Some(FieldValue::MultiChoice(vec![
                "pasta".to_string(),
                "quick".to_string()
            ]))
        );
    }

    #[test]
    fn test_decode_number_property() {
        let set = json!({"type": "number", "number": 4.5});
        let unset = json!({"type": "number", "number": null});
        assert_eq!(decode_property(&set), Some(FieldValue::Number(Some(4.5))));
        assert_eq!(decode_property(&unset), Some(FieldValue::Number(None)));
    }

    #[test]
    fn test_unknown_property_type_dropped() {
        let prop = json!({"type": "formula", "formula": {}});
        assert_eq!(decode_property(&prop), None);
    }

    #[test]
    fn test_decode_record() {
        let page = json!({
            "id": "page-1",
            "properties": {
                "Name": {"type": "title", "title": [{"plain_text": "A"}]},
                "Rating": {"type": "number", "number": null},
                "Cover": {"type": "files", "files": []}
            }
        });
        let record = decode_record(&page).unwrap();
        assert_eq!(record.id, "page-1");
        assert_eq!(
            record.field("Name"),
            Some(&FieldValue::Text("A".to_string()))
        );
        assert_eq!(record.field("Rating"), Some(&FieldValue::Number(None)));
        assert_eq!(record.field("Cover"), None);
    }

    #[test]
    fn test_decode_record_without_id_fails() {
        let page = json!({"properties": {}});
        assert!(decode_record(&page).is_err());
    }

    #[test]
    fn test_decode_todo_block() {
        let block = json!({
            "id": "b1",
            "type": "to_do",
            "has_children": false,
            "to_do": {
                "rich_text": [{"plain_text": "buy milk"}],
                "checked": true
            }
        });
        let decoded = decode_block(&block).unwrap();
        assert_eq!(
            decoded.kind,
            BlockKind::Todo {
                text: "buy milk".to_string(),
                checked: true
            }
        );
        assert!(decoded.is_checked_todo());
    }

    #[test]
    fn test_decode_other_block() {
        let block = json!({
            "id": "b2",
            "type": "paragraph",
            "has_children": true,
            "paragraph": {"rich_text": []}
        });
        let decoded = decode_block(&block).unwrap();
        assert_eq!(decoded.kind, BlockKind::Other);
        assert!(decoded.has_children);
    }
}
