//! Stored document shape and conversions to contract models
//!
//! Every backend keeps documents as JSON objects with camelCase field names.
//! Reading is lenient: missing fields are absent, scalar text fields accept
//! numbers and booleans, `schemaJsonLd` is normalized, a `media` entry that
//! is not a string is skipped and an unparseable timestamp is dropped.

use crate::contract::{ContentItem, HomeContent, SeoFields};
use crate::domain::jsonld::normalize_json_ld;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Document fields holding timestamps
pub const TIMESTAMP_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeoDocument {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    seo_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    meta_description: Option<String>,
    #[serde(default)]
    schema_json_ld: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    og_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    og_description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    og_image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    background_html: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HomeDocument {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    h1: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    subtitle: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    lang: Option<String>,
    #[serde(flatten)]
    seo: SeoDocument,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemDocument {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    lang: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    subtitle: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    url_slug: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    h1: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    price: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    main_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_media")]
    media: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    main_image_alt: Option<String>,
    #[serde(flatten)]
    seo: SeoDocument,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    updated_at: Option<DateTime<Utc>>,
}

impl From<SeoDocument> for SeoFields {
    fn from(doc: SeoDocument) -> Self {
        Self {
            seo_title: doc.seo_title,
            meta_description: doc.meta_description,
            schema_json_ld: normalize_json_ld(doc.schema_json_ld),
            og_title: doc.og_title,
            og_description: doc.og_description,
            og_image: doc.og_image,
            background_html: doc.background_html,
        }
    }
}

impl From<&SeoFields> for SeoDocument {
    fn from(seo: &SeoFields) -> Self {
        Self {
            seo_title: seo.seo_title.clone(),
            meta_description: seo.meta_description.clone(),
            schema_json_ld: Some(Value::Object(seo.schema_json_ld.clone())),
            og_title: seo.og_title.clone(),
            og_description: seo.og_description.clone(),
            og_image: seo.og_image.clone(),
            background_html: seo.background_html.clone(),
        }
    }
}

/// Decode the home document
pub fn home_from_json(value: Value) -> Result<HomeContent> {
    let doc: HomeDocument =
        serde_json::from_value(value).context("malformed home document")?;
    Ok(HomeContent {
        h1: doc.h1,
        subtitle: doc.subtitle,
        lang: doc.lang,
        seo: doc.seo.into(),
    })
}

/// Encode the home document
pub fn home_to_json(home: &HomeContent) -> Result<Map<String, Value>> {
    let doc = HomeDocument {
        h1: home.h1.clone(),
        subtitle: home.subtitle.clone(),
        lang: home.lang.clone(),
        seo: (&home.seo).into(),
    };
    into_object(serde_json::to_value(doc)?)
}

/// Decode an item document stored under `id`
pub fn item_from_json(id: &str, value: Value) -> Result<ContentItem> {
    let doc: ItemDocument = serde_json::from_value(value)
        .with_context(|| format!("malformed item document '{}'", id))?;
    Ok(ContentItem {
        id: id.to_string(),
        lang: doc.lang,
        title: doc.title,
        subtitle: doc.subtitle,
        description: doc.description,
        url_slug: doc.url_slug,
        h1: doc.h1,
        price: doc.price,
        main_content: doc.main_content,
        media: doc.media,
        main_image_alt: doc.main_image_alt,
        seo: doc.seo.into(),
        created_at: doc.created_at,
        updated_at: doc.updated_at,
    })
}

/// Encode an item document; the id is the document key, not a field
pub fn item_to_json(item: &ContentItem) -> Result<Map<String, Value>> {
    let doc = ItemDocument {
        lang: item.lang.clone(),
        title: item.title.clone(),
        subtitle: item.subtitle.clone(),
        description: item.description.clone(),
        url_slug: item.url_slug.clone(),
        h1: item.h1.clone(),
        price: item.price.clone(),
        main_content: item.main_content.clone(),
        media: item.media.clone(),
        main_image_alt: item.main_image_alt.clone(),
        seo: (&item.seo).into(),
        created_at: item.created_at,
        updated_at: item.updated_at,
    };
    into_object(serde_json::to_value(doc)?)
}

/// Text field; numbers and booleans are kept as their JSON text
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring non-scalar text field: {}", other);
            None
        }
    })
}

/// `media` list; a single string counts as one entry, non-strings are skipped
fn lenient_media<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        Value::String(url) if !url.trim().is_empty() => vec![url],
        _ => Vec::new(),
    })
}

/// RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::String(text) = &value else {
        if !value.is_null() {
            tracing::warn!("Dropping non-string timestamp: {}", value);
        }
        return Ok(None);
    };
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }
    match NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        Some(midnight) => Ok(Some(midnight.and_utc())),
        None => {
            tracing::warn!("Dropping unparseable timestamp '{}'", text);
            Ok(None)
        }
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("document encoded to non-object JSON: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_decoding_is_lenient() {
        let item = item_from_json(
            "service-1",
            json!({
                "title": "Landing",
                "urlSlug": "landing",
                "media": ["https://a.example/1.png", 42, null],
                "schemaJsonLd": "{not json",
                "unknownField": true,
                "updatedAt": "2025-05-01T10:00:00Z"
            }),
        )
        .unwrap();

        assert_eq!(item.id, "service-1");
        assert_eq!(item.url_slug.as_deref(), Some("landing"));
        assert_eq!(item.media, vec!["https://a.example/1.png"]);
        assert!(item.seo.schema_json_ld.is_empty());
        assert!(item.updated_at.is_some());
        assert!(item.lang.is_none());
    }

    #[test]
    fn test_item_decoding_coerces_scalars_and_dates() {
        let item = item_from_json(
            "service-2",
            json!({
                "title": "Audit",
                "price": 100,
                "subtitle": true,
                "description": {"nested": "object"},
                "media": "https://a.example/only.png",
                "createdAt": "2024-05-01",
                "updatedAt": "last tuesday"
            }),
        )
        .unwrap();

        assert_eq!(item.price.as_deref(), Some("100"));
        assert_eq!(item.subtitle.as_deref(), Some("true"));
        assert!(item.description.is_none());
        assert_eq!(item.media, vec!["https://a.example/only.png"]);
        assert_eq!(
            item.created_at,
            DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z")
                .ok()
                .map(|t| t.with_timezone(&Utc))
        );
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_home_decoding_coerces_scalars() {
        let home = home_from_json(json!({"h1": 2025, "ogTitle": 1.5, "lang": null})).unwrap();
        assert_eq!(home.h1.as_deref(), Some("2025"));
        assert_eq!(home.seo.og_title.as_deref(), Some("1.5"));
        assert!(home.lang.is_none());
    }

    #[test]
    fn test_item_encoding_uses_camel_case() {
        let item = ContentItem {
            id: "blo-1".into(),
            url_slug: Some("post".into()),
            main_image_alt: Some("alt".into()),
            seo: SeoFields {
                og_image: Some("https://a.example/og.png".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let map = item_to_json(&item).unwrap();
        assert_eq!(map.get("urlSlug"), Some(&json!("post")));
        assert_eq!(map.get("mainImageAlt"), Some(&json!("alt")));
        assert_eq!(map.get("ogImage"), Some(&json!("https://a.example/og.png")));
        assert_eq!(map.get("schemaJsonLd"), Some(&json!({})));
        assert!(!map.contains_key("id"));
        assert!(!map.contains_key("price"));
    }

    #[test]
    fn test_home_round_trip_keeps_json_ld_object() {
        let home = home_from_json(json!({
            "h1": "Hello",
            "schemaJsonLd": {"@type": "Organization"}
        }))
        .unwrap();
        let map = home_to_json(&home).unwrap();
        assert_eq!(map.get("schemaJsonLd"), Some(&json!({"@type": "Organization"})));
        assert_eq!(map.get("h1"), Some(&json!("Hello")));
    }
}
