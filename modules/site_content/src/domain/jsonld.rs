//! Schema.org JSON-LD handling
//!
//! Stored documents carry `schemaJsonLd` either as an object or as JSON text.
//! Reading is lenient (anything unusable degrades to an empty object);
//! admin input is strict.

use crate::contract::SiteError;
use serde_json::{Map, Value};

/// Normalize a stored `schemaJsonLd` value into an object
pub fn normalize_json_ld(value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map,
        Some(Value::String(text)) if text.trim_start().starts_with('{') => {
            match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                Ok(_) => Map::new(),
                Err(e) => {
                    tracing::warn!("Failed to parse schemaJsonLd string: {}", e);
                    Map::new()
                }
            }
        }
        _ => Map::new(),
    }
}

/// Parse the JSON-LD textarea of the admin forms
///
/// Blank input means "no structured data".
pub fn parse_json_ld_input(text: &str) -> Result<Map<String, Value>, SiteError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(SiteError::InvalidJsonLd {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(SiteError::InvalidJsonLd {
            message: e.to_string(),
        }),
    }
}

/// Pretty-printed text for the admin textarea
pub fn json_ld_to_input(map: &Map<String, Value>) -> String {
    serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string())
}

/// Compact text for a `<script type="application/ld+json">` body
///
/// `</` is escaped so the payload can never close the script element.
pub fn json_ld_script_body(map: &Map<String, Value>) -> String {
    serde_json::to_string(map)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_kept() {
        let map = normalize_json_ld(Some(json!({"@type": "Organization"})));
        assert_eq!(map.get("@type"), Some(&json!("Organization")));
    }

    #[test]
    fn test_json_text_is_parsed() {
        let map = normalize_json_ld(Some(json!("  {\"@context\": \"https://schema.org\"}")));
        assert_eq!(map.get("@context"), Some(&json!("https://schema.org")));
    }

    #[test]
    fn test_malformed_text_degrades_to_empty_object() {
        assert!(normalize_json_ld(Some(json!("{not json"))).is_empty());
        assert!(normalize_json_ld(Some(json!("plain words"))).is_empty());
        assert!(normalize_json_ld(Some(json!([1, 2]))).is_empty());
        assert!(normalize_json_ld(None).is_empty());
    }

    #[test]
    fn test_admin_input_must_be_an_object() {
        assert!(parse_json_ld_input("").unwrap().is_empty());
        assert!(parse_json_ld_input("{\"a\": 1}").is_ok());
        assert!(matches!(
            parse_json_ld_input("[1]"),
            Err(SiteError::InvalidJsonLd { .. })
        ));
        assert!(matches!(
            parse_json_ld_input("{oops"),
            Err(SiteError::InvalidJsonLd { .. })
        ));
    }

    #[test]
    fn test_script_body_cannot_close_the_element() {
        let map = parse_json_ld_input(r#"{"name": "</script><b>"}"#).unwrap();
        let body = json_ld_script_body(&map);
        assert!(!body.contains("</script>"));
    }
}
