//! Native client trait for in-process consumers
//!
//! The HTML and REST surfaces both talk to the module through this API.

use super::{
    error::SiteError,
    model::{Collection, ContentItem, HomeContent, ItemUpdate, SiteData},
};
use async_trait::async_trait;

/// Site content API
#[async_trait]
pub trait SiteContentApi: Send + Sync {
    /// Load the home document and every collection
    async fn load_site_data(&self) -> Result<SiteData, SiteError>;

    /// Get one item by document id
    async fn get_item(&self, collection: Collection, id: &str) -> Result<ContentItem, SiteError>;

    /// Create an item with template defaults
    async fn add_item(&self, collection: Collection) -> Result<ContentItem, SiteError>;

    /// Overwrite the editable fields of an existing item
    async fn save_item(
        &self,
        collection: Collection,
        id: &str,
        update: ItemUpdate,
    ) -> Result<ContentItem, SiteError>;

    /// Delete an item
    async fn delete_item(&self, collection: Collection, id: &str) -> Result<(), SiteError>;

    /// Update the home document in place
    async fn save_home(&self, home: HomeContent) -> Result<HomeContent, SiteError>;
}
