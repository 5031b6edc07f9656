//! Repository trait for document store access
//!
//! Implementations live in `infra` (in-memory, Firestore REST, SQL table).

use crate::contract::{Collection, ContentItem, HomeContent};
use anyhow::Result;
use async_trait::async_trait;

/// Document id of the singleton home document
pub const HOME_COLLECTION: &str = "home";
pub const HOME_DOCUMENT_ID: &str = "content";

/// Access to the `home` singleton and the four content collections
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Read the home document, `None` when it does not exist
    async fn get_home(&self) -> Result<Option<HomeContent>>;

    /// Create or overwrite the home document
    async fn set_home(&self, home: &HomeContent) -> Result<()>;

    /// Update an existing home document; `false` when it does not exist
    async fn update_home(&self, home: &HomeContent) -> Result<bool>;

    /// All items of a collection, in store order
    async fn list_items(&self, collection: Collection) -> Result<Vec<ContentItem>>;

    /// One item by document id
    async fn get_item(&self, collection: Collection, id: &str) -> Result<Option<ContentItem>>;

    /// Create or overwrite an item under `item.id`
    async fn set_item(&self, collection: Collection, item: &ContentItem) -> Result<()>;

    /// Update an existing item; `false` when it does not exist
    async fn update_item(&self, collection: Collection, item: &ContentItem) -> Result<bool>;

    /// Delete an item; deleting a missing item is not an error
    async fn delete_item(&self, collection: Collection, id: &str) -> Result<()>;
}
