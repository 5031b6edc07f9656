//! Common test fixtures: sample content, a failing store and app builders
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use site_content::config::SiteContentConfig;
use site_content::domain::ContentRepository;
use site_content::infra::auth::static_credentials::password_digest;
use site_content::infra::auth::StaticCredentialsProvider;
use site_content::infra::storage::InMemoryContentRepository;
use site_content::{Collection, ContentItem, HomeContent, SeoFields, SiteContentModule, SiteData};
use std::sync::Arc;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";
pub const BASE_URL: &str = "https://example.com";

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

pub fn item(id: &str, lang: &str, slug: &str, title: &str) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        lang: Some(lang.to_string()),
        title: Some(title.to_string()),
        description: Some(format!("{} description", title)),
        url_slug: Some(slug.to_string()),
        h1: Some(title.to_string()),
        main_content: Some("First paragraph.\n\nSecond paragraph.".to_string()),
        media: vec!["https://img.example.com/a.jpg".to_string()],
        ..Default::default()
    }
}

/// Home plus two services, one portfolio item without a slug and one blog post
pub fn sample_site() -> SiteData {
    let mut unpublished = item("portfolio-1", "en", "", "Draft case");
    unpublished.url_slug = None;

    SiteData {
        home: HomeContent {
            h1: Some("Digital Craft".to_string()),
            subtitle: Some("Fast.\n\nAffordable.".to_string()),
            lang: Some("en".to_string()),
            seo: SeoFields {
                seo_title: Some("Digital Craft | Home".to_string()),
                meta_description: Some("Websites for small businesses".to_string()),
                schema_json_ld: json!({"@type": "Organization"})
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
                ..Default::default()
            },
        },
        services: vec![
            item("service-1", "en", "my-slug", "Landing page"),
            item("service-2", "ru", "lending", "Лендинг"),
        ],
        portfolio: vec![unpublished],
        blog: vec![item("blog-1", "en", "speed", "Why speed matters")],
        contact: vec![],
    }
}

/// In-memory store preloaded with `data`
pub async fn seeded_repo(data: &SiteData) -> Arc<InMemoryContentRepository> {
    let repo = Arc::new(InMemoryContentRepository::new());
    repo.set_home(&data.home).await.unwrap();
    for collection in Collection::ALL {
        for item in data.items(collection) {
            repo.set_item(collection, item).await.unwrap();
        }
    }
    repo
}

pub fn test_config() -> SiteContentConfig {
    let mut cfg = SiteContentConfig::default();
    cfg.site.base_url = BASE_URL.to_string();
    cfg.site.metrika_counter_id = Some(42);
    cfg.auth.session_secret = "test-session-secret".to_string();
    cfg
}

pub fn test_module(repo: Arc<dyn ContentRepository>) -> SiteContentModule {
    let auth = Arc::new(StaticCredentialsProvider::new(
        ADMIN_EMAIL,
        &password_digest(ADMIN_PASSWORD),
    ));
    SiteContentModule::from_parts(&test_config(), repo, auth)
}

pub fn test_router(repo: Arc<dyn ContentRepository>) -> Router {
    test_module(repo).router()
}

/// Store whose every call fails, as when the document store is unreachable
#[derive(Default)]
pub struct FailingRepository;

#[async_trait]
impl ContentRepository for FailingRepository {
    async fn get_home(&self) -> Result<Option<HomeContent>> {
        Err(anyhow!("store offline"))
    }

    async fn set_home(&self, _home: &HomeContent) -> Result<()> {
        Err(anyhow!("store offline"))
    }

    async fn update_home(&self, _home: &HomeContent) -> Result<bool> {
        Err(anyhow!("store offline"))
    }

    async fn list_items(&self, _collection: Collection) -> Result<Vec<ContentItem>> {
        Err(anyhow!("store offline"))
    }

    async fn get_item(&self, _collection: Collection, _id: &str) -> Result<Option<ContentItem>> {
        Err(anyhow!("store offline"))
    }

    async fn set_item(&self, _collection: Collection, _item: &ContentItem) -> Result<()> {
        Err(anyhow!("store offline"))
    }

    async fn update_item(&self, _collection: Collection, _item: &ContentItem) -> Result<bool> {
        Err(anyhow!("store offline"))
    }

    async fn delete_item(&self, _collection: Collection, _id: &str) -> Result<()> {
        Err(anyhow!("store offline"))
    }
}
