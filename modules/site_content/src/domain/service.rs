//! Domain service - loading and CRUD orchestration over the document store

use crate::contract::{Collection, ContentItem, HomeContent, ItemUpdate, SeoFields, SiteData, SiteError};
use super::lang::DEFAULT_LANG;
use super::repository::{ContentRepository, HOME_COLLECTION, HOME_DOCUMENT_ID};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const NEW_ITEM_TITLE: &str = "New Item Title";
const NEW_ITEM_SUBTITLE: &str = "New Subtitle";
const NEW_ITEM_DESCRIPTION: &str = "A short description for the card.";
const NEW_ITEM_CONTENT: &str =
    "Full content for the detailed page.\n\nHTML and paragraph breaks are supported!";

/// Domain service for site content
pub struct Service {
    repo: Arc<dyn ContentRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// Load the home document and all collections concurrently
    ///
    /// A missing home document yields empty home content.
    pub async fn load_site_data(&self) -> Result<SiteData, SiteError> {
        let (home, services, portfolio, blog, contact) = futures::try_join!(
            self.repo.get_home(),
            self.repo.list_items(Collection::Services),
            self.repo.list_items(Collection::Portfolio),
            self.repo.list_items(Collection::Blog),
            self.repo.list_items(Collection::Contact),
        )
        .map_err(SiteError::storage)?;

        tracing::debug!(
            services = services.len(),
            portfolio = portfolio.len(),
            blog = blog.len(),
            contact = contact.len(),
            "Site data loaded"
        );

        Ok(SiteData {
            home: home.unwrap_or_default(),
            services,
            portfolio,
            blog,
            contact,
        })
    }

    /// Write `seed` when the store has no home document yet
    ///
    /// Returns whether anything was written.
    pub async fn seed_if_empty(&self, seed: &SiteData) -> Result<bool, SiteError> {
        if self.repo.get_home().await.map_err(SiteError::storage)?.is_some() {
            return Ok(false);
        }

        tracing::info!("Document store is empty, seeding with initial data");
        self.repo.set_home(&seed.home).await.map_err(SiteError::storage)?;
        for collection in Collection::ALL {
            for item in seed.items(collection) {
                self.repo
                    .set_item(collection, item)
                    .await
                    .map_err(SiteError::storage)?;
            }
        }
        tracing::info!("Document store seeded");
        Ok(true)
    }

    /// Get one item by document id
    pub async fn get_item(&self, collection: Collection, id: &str) -> Result<ContentItem, SiteError> {
        self.repo
            .get_item(collection, id)
            .await
            .map_err(SiteError::storage)?
            .ok_or_else(|| SiteError::item_not_found(collection, id))
    }

    /// Create an item with template defaults under a generated id
    pub async fn add_item(&self, collection: Collection) -> Result<ContentItem, SiteError> {
        let item = new_item_template(collection, Utc::now());
        self.repo
            .set_item(collection, &item)
            .await
            .map_err(SiteError::storage)?;
        tracing::info!(collection = %collection, id = %item.id, "Item added");
        Ok(item)
    }

    /// Overwrite the editable fields of an existing item
    pub async fn save_item(
        &self,
        collection: Collection,
        id: &str,
        update: ItemUpdate,
    ) -> Result<ContentItem, SiteError> {
        let mut item = self.get_item(collection, id).await?;
        apply_update(&mut item, update);
        item.updated_at = Some(Utc::now());

        let updated = self
            .repo
            .update_item(collection, &item)
            .await
            .map_err(SiteError::storage)?;
        if !updated {
            return Err(SiteError::item_not_found(collection, id));
        }

        tracing::info!(collection = %collection, id = %id, "Item saved");
        Ok(item)
    }

    /// Delete an item
    pub async fn delete_item(&self, collection: Collection, id: &str) -> Result<(), SiteError> {
        self.repo
            .delete_item(collection, id)
            .await
            .map_err(SiteError::storage)?;
        tracing::info!(collection = %collection, id = %id, "Item deleted");
        Ok(())
    }

    /// Update the home document in place
    pub async fn save_home(&self, home: HomeContent) -> Result<HomeContent, SiteError> {
        let updated = self
            .repo
            .update_home(&home)
            .await
            .map_err(SiteError::storage)?;
        if !updated {
            return Err(SiteError::NotFound {
                resource: "home".to_string(),
                id: format!("{}/{}", HOME_COLLECTION, HOME_DOCUMENT_ID),
            });
        }
        tracing::info!("Home page updated");
        Ok(home)
    }
}

/// Home document written into an empty store
pub fn default_home() -> HomeContent {
    HomeContent {
        h1: Some("Digital Craft".to_string()),
        subtitle: Some("Professional websites for small businesses".to_string()),
        lang: Some(DEFAULT_LANG.to_string()),
        seo: SeoFields {
            seo_title: Some("Digital Craft".to_string()),
            meta_description: Some("Professional websites for small businesses".to_string()),
            ..Default::default()
        },
    }
}

/// Template for a freshly added item
pub fn new_item_template(collection: Collection, now: DateTime<Utc>) -> ContentItem {
    ContentItem {
        id: format!("{}-{}", collection.id_prefix(), now.timestamp_millis()),
        lang: Some(DEFAULT_LANG.to_string()),
        title: Some(NEW_ITEM_TITLE.to_string()),
        subtitle: Some(NEW_ITEM_SUBTITLE.to_string()),
        description: Some(NEW_ITEM_DESCRIPTION.to_string()),
        url_slug: Some(slugify(NEW_ITEM_TITLE)),
        h1: Some(NEW_ITEM_TITLE.to_string()),
        price: Some(String::new()),
        main_content: Some(NEW_ITEM_CONTENT.to_string()),
        media: Vec::new(),
        main_image_alt: Some(String::new()),
        seo: SeoFields {
            seo_title: Some(NEW_ITEM_TITLE.to_string()),
            meta_description: Some(String::new()),
            schema_json_ld: Default::default(),
            og_title: Some(String::new()),
            og_description: Some(String::new()),
            og_image: Some(String::new()),
            background_html: Some(String::new()),
        },
        created_at: Some(now),
        updated_at: Some(now),
    }
}

/// Lowercase, whitespace runs to `-`, drop everything outside `[a-z0-9-]`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

fn apply_update(item: &mut ContentItem, update: ItemUpdate) {
    item.lang = Some(update.lang);
    item.title = Some(update.title);
    item.subtitle = Some(update.subtitle);
    item.description = Some(update.description);
    item.url_slug = Some(update.url_slug.trim().to_string());
    item.h1 = Some(update.h1);
    item.price = Some(update.price);
    item.main_content = Some(update.main_content);
    item.media = update.media;
    item.main_image_alt = Some(update.main_image_alt);
    item.seo = SeoFields {
        seo_title: Some(update.seo_title),
        meta_description: Some(update.meta_description),
        schema_json_ld: update.schema_json_ld,
        og_title: Some(update.og_title),
        og_description: Some(update.og_description),
        og_image: Some(update.og_image),
        background_html: Some(update.background_html),
    };
}
