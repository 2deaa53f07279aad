//! Model response post-processing.
//!
//! Generation output is supposed to be strict JSON, but models routinely
//! wrap it in a fenced block (```json ... ``` or ``` ... ```). The fence is
//! stripped before parsing; fenced and bare payloads must parse identically.

use serde_json::Value as JsonValue;

use notefill_core::{Error, Result};

/// Strip an optional surrounding code fence.
///
/// Leaves anything that is not a complete fenced block untouched (apart
/// from trimming).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the end of the opening line.
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = rest[newline + 1..].trim_end();
    match body.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// Parse model output as JSON after fence stripping.
pub fn parse_json(text: &str) -> Result<JsonValue> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(Error::ResponseParse("response is empty".to_string()));
    }
    serde_json::from_str(body).map_err(|e| Error::ResponseParse(format!("invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_json_parses_like_bare() {
        let bare = r#"{"items":[{"x":"1"}]}"#;
        let fenced = "```json\n{\"items\":[{\"x\":\"1\"}]}\n```";
        assert_eq!(parse_json(bare).unwrap(), parse_json(fenced).unwrap());
        assert_eq!(parse_json(bare).unwrap(), json!({"items": [{"x": "1"}]}));
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(parse_json(fenced).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_surrounding_whitespace() {
        let text = "\n\n  ```json\n{\"a\": 1}\n```  \n";
        assert_eq!(parse_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_empty_response_is_parse_error() {
        let err = parse_json("   ").unwrap_err();
        assert!(matches!(err, Error::ResponseParse(_)));
    }

    #[test]
    fn test_empty_fence_is_parse_error() {
        let err = parse_json("```json\n```").unwrap_err();
        assert!(matches!(err, Error::ResponseParse(_)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_json("not json {{{").unwrap_err();
        assert!(matches!(err, Error::ResponseParse(_)));
    }

    #[test]
    fn test_unterminated_fence_left_as_is() {
        // An opening fence with no closing fence is not a fenced block;
        // the text fails JSON parsing instead of being half-stripped.
        assert!(parse_json("```json\n{\"a\": 1}").is_err());
    }
}
