//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{ContentItem, HomeContent, ItemUpdate, SeoFields, SiteData, SiteError};
use crate::domain::admin::split_media;
use crate::domain::jsonld::parse_json_ld_input;
use serde_json::{Map, Value};

impl From<ContentItem> for ItemDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id,
            lang: item.lang,
            title: item.title,
            subtitle: item.subtitle,
            description: item.description,
            url_slug: item.url_slug,
            h1: item.h1,
            price: item.price,
            main_content: item.main_content,
            media: item.media,
            main_image_alt: item.main_image_alt,
            seo_title: item.seo.seo_title,
            meta_description: item.seo.meta_description,
            schema_json_ld: Value::Object(item.seo.schema_json_ld),
            og_title: item.seo.og_title,
            og_description: item.seo.og_description,
            og_image: item.seo.og_image,
            background_html: item.seo.background_html,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<HomeContent> for HomeDto {
    fn from(home: HomeContent) -> Self {
        Self {
            h1: home.h1,
            subtitle: home.subtitle,
            lang: home.lang,
            seo_title: home.seo.seo_title,
            meta_description: home.seo.meta_description,
            schema_json_ld: Value::Object(home.seo.schema_json_ld),
            og_title: home.seo.og_title,
            og_description: home.seo.og_description,
            og_image: home.seo.og_image,
            background_html: home.seo.background_html,
        }
    }
}

impl From<SiteData> for SiteDataDto {
    fn from(data: SiteData) -> Self {
        let items = |items: Vec<ContentItem>| items.into_iter().map(ItemDto::from).collect();
        Self {
            home: data.home.into(),
            services: items(data.services),
            portfolio: items(data.portfolio),
            blog: items(data.blog),
            contact: items(data.contact),
        }
    }
}

impl TryFrom<UpdateItemRequest> for ItemUpdate {
    type Error = SiteError;

    fn try_from(req: UpdateItemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            lang: req.lang,
            title: req.title,
            subtitle: req.subtitle,
            description: req.description,
            url_slug: req.url_slug.trim().to_string(),
            h1: req.h1,
            price: req.price,
            main_content: req.main_content,
            media: split_media(&req.media.join("\n")),
            main_image_alt: req.main_image_alt,
            seo_title: req.seo_title,
            meta_description: req.meta_description,
            schema_json_ld: json_ld_from_request(req.schema_json_ld)?,
            og_title: req.og_title,
            og_description: req.og_description,
            og_image: req.og_image,
            background_html: req.background_html,
        })
    }
}

impl TryFrom<HomeDto> for HomeContent {
    type Error = SiteError;

    fn try_from(dto: HomeDto) -> Result<Self, Self::Error> {
        Ok(Self {
            h1: dto.h1,
            subtitle: dto.subtitle,
            lang: dto.lang,
            seo: SeoFields {
                seo_title: dto.seo_title,
                meta_description: dto.meta_description,
                schema_json_ld: json_ld_from_request(dto.schema_json_ld)?,
                og_title: dto.og_title,
                og_description: dto.og_description,
                og_image: dto.og_image,
                background_html: dto.background_html,
            },
        })
    }
}

/// Requests may send JSON-LD as an object or as JSON text
fn json_ld_from_request(value: Value) -> Result<Map<String, Value>, SiteError> {
    match value {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        Value::String(text) => parse_json_ld_input(&text),
        _ => Err(SiteError::InvalidJsonLd {
            message: "expected a JSON object".to_string(),
        }),
    }
}
