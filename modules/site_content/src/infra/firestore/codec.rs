//! Firestore REST typed-value codec
//!
//! The REST API wraps every field in a one-key object naming its type
//! (`{"stringValue": "x"}`, `{"arrayValue": {"values": [...]}}`, ...).
//! Documents are plain JSON objects on our side.

use serde_json::{json, Map, Number, Value};

use crate::infra::storage::document::TIMESTAMP_FIELDS;

/// Encode plain JSON into a Firestore value
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // int64 travels as a decimal string
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(values) => json!({
            "arrayValue": { "values": values.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": encode_map(map) } }),
    }
}

/// Encode a map of plain JSON into Firestore `fields`
pub fn encode_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

/// Encode document fields; timestamp fields become `timestampValue`
pub fn encode_fields(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let encoded = match value {
                Value::String(ts) if TIMESTAMP_FIELDS.contains(&key.as_str()) => {
                    json!({ "timestampValue": ts })
                }
                other => encode_value(other),
            };
            (key.clone(), encoded)
        })
        .collect()
}

/// Decode a Firestore value into plain JSON
///
/// Timestamps become RFC 3339 strings, references their resource name,
/// geo points `{latitude, longitude}`. Unknown shapes decode to `null`.
pub fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|obj| obj.iter().next()) else {
        return Value::Null;
    };
    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => Value::Bool(inner.as_bool().unwrap_or_default()),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|i| Value::Number(i.into()))
                .unwrap_or(Value::Null),
            Value::Number(n) => Value::Number(n.clone()),
            _ => Value::Null,
        },
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "geoPointValue" => inner.clone(),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}

/// Decode Firestore `fields` into a plain JSON map
pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_document_fields() {
        let fields = json!({
            "title": { "stringValue": "Landing" },
            "media": { "arrayValue": { "values": [ { "stringValue": "a.png" } ] } },
            "empty": { "arrayValue": {} },
            "count": { "integerValue": "3" },
            "ratio": { "doubleValue": 0.5 },
            "schemaJsonLd": { "mapValue": { "fields": { "@type": { "stringValue": "Service" } } } },
            "updatedAt": { "timestampValue": "2025-01-02T03:04:05.678Z" },
            "draft": { "booleanValue": false },
            "nothing": { "nullValue": null }
        });
        let decoded = decode_fields(fields.as_object().unwrap());
        assert_eq!(
            Value::Object(decoded),
            json!({
                "title": "Landing",
                "media": ["a.png"],
                "empty": [],
                "count": 3,
                "ratio": 0.5,
                "schemaJsonLd": { "@type": "Service" },
                "updatedAt": "2025-01-02T03:04:05.678Z",
                "draft": false,
                "nothing": null
            })
        );
    }

    #[test]
    fn test_encode_marks_timestamps() {
        let doc = json!({
            "createdAt": "2025-01-02T03:04:05Z",
            "title": "2025-01-02T03:04:05Z",
            "media": [],
            "schemaJsonLd": {}
        });
        let fields = encode_fields(doc.as_object().unwrap());
        assert_eq!(fields["createdAt"], json!({ "timestampValue": "2025-01-02T03:04:05Z" }));
        assert_eq!(fields["title"], json!({ "stringValue": "2025-01-02T03:04:05Z" }));
        assert_eq!(fields["media"], json!({ "arrayValue": { "values": [] } }));
        assert_eq!(fields["schemaJsonLd"], json!({ "mapValue": { "fields": {} } }));
    }

    #[test]
    fn test_integers_encode_as_strings() {
        assert_eq!(encode_value(&json!(42)), json!({ "integerValue": "42" }));
        assert_eq!(encode_value(&json!(1.5)), json!({ "doubleValue": 1.5 }));
    }
}
