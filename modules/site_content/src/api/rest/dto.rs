//! REST DTOs with serde derives for the JSON admin API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SessionRequest {
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub password: String,
}

/// Issued session token, usable as a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub token: String,
    pub expires_in_secs: u64,
}

/// Content item response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    /// Document id
    #[schema(example = "service-1735689600000")]
    pub id: String,
    pub lang: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[schema(example = "landing-page")]
    pub url_slug: Option<String>,
    pub h1: Option<String>,
    pub price: Option<String>,
    pub main_content: Option<String>,
    pub media: Vec<String>,
    pub main_image_alt: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    /// Schema.org JSON-LD object
    #[schema(value_type = Object)]
    pub schema_json_ld: serde_json::Value,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub background_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Home document DTO, used for responses and updates
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeDto {
    pub h1: Option<String>,
    pub subtitle: Option<String>,
    pub lang: Option<String>,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    /// JSON-LD object, or JSON text of one
    #[schema(value_type = Object)]
    pub schema_json_ld: serde_json::Value,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub background_html: Option<String>,
}

/// Item update request; omitted fields are written empty
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateItemRequest {
    pub lang: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub url_slug: String,
    pub h1: String,
    pub price: String,
    pub main_content: String,
    pub media: Vec<String>,
    pub main_image_alt: String,
    pub seo_title: String,
    pub meta_description: String,
    /// JSON-LD object, or JSON text of one
    #[schema(value_type = Object)]
    pub schema_json_ld: serde_json::Value,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub background_html: String,
}

/// Whole site content
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteDataDto {
    pub home: HomeDto,
    pub services: Vec<ItemDto>,
    pub portfolio: Vec<ItemDto>,
    pub blog: Vec<ItemDto>,
    pub contact: Vec<ItemDto>,
}
