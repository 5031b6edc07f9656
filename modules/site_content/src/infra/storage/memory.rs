//! In-memory document store for tests and local demos

use crate::contract::{Collection, ContentItem, HomeContent};
use crate::domain::repository::ContentRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

#[derive(Default)]
struct State {
    home: Option<HomeContent>,
    // BTreeMap keeps listing in document id order, like the REST store
    items: HashMap<Collection, BTreeMap<String, ContentItem>>,
}

/// Process-local repository guarded by a `RwLock`
#[derive(Default)]
pub struct InMemoryContentRepository {
    state: RwLock<State>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items stored in a collection
    pub fn count(&self, collection: Collection) -> usize {
        self.state
            .read()
            .items
            .get(&collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_home(&self) -> Result<Option<HomeContent>> {
        Ok(self.state.read().home.clone())
    }

    async fn set_home(&self, home: &HomeContent) -> Result<()> {
        self.state.write().home = Some(home.clone());
        Ok(())
    }

    async fn update_home(&self, home: &HomeContent) -> Result<bool> {
        let mut state = self.state.write();
        match state.home.as_mut() {
            Some(existing) => {
                *existing = home.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_items(&self, collection: Collection) -> Result<Vec<ContentItem>> {
        Ok(self
            .state
            .read()
            .items
            .get(&collection)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_item(&self, collection: Collection, id: &str) -> Result<Option<ContentItem>> {
        Ok(self
            .state
            .read()
            .items
            .get(&collection)
            .and_then(|items| items.get(id))
            .cloned())
    }

    async fn set_item(&self, collection: Collection, item: &ContentItem) -> Result<()> {
        self.state
            .write()
            .items
            .entry(collection)
            .or_default()
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update_item(&self, collection: Collection, item: &ContentItem) -> Result<bool> {
        let mut state = self.state.write();
        match state
            .items
            .get_mut(&collection)
            .and_then(|items| items.get_mut(&item.id))
        {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_item(&self, collection: Collection, id: &str) -> Result<()> {
        if let Some(items) = self.state.write().items.get_mut(&collection) {
            items.remove(id);
        }
        Ok(())
    }
}
