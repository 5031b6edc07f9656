//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Collection, ContentItem, HomeContent, ItemUpdate, SiteContentApi, SiteData, SiteError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service directly
///
/// Both the HTML admin panel and the JSON admin API go through this client.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SiteContentApi for NativeClient {
    async fn load_site_data(&self) -> Result<SiteData, SiteError> {
        self.service.load_site_data().await
    }

    async fn get_item(&self, collection: Collection, id: &str) -> Result<ContentItem, SiteError> {
        self.service.get_item(collection, id).await
    }

    async fn add_item(&self, collection: Collection) -> Result<ContentItem, SiteError> {
        self.service.add_item(collection).await
    }

    async fn save_item(
        &self,
        collection: Collection,
        id: &str,
        update: ItemUpdate,
    ) -> Result<ContentItem, SiteError> {
        self.service.save_item(collection, id, update).await
    }

    async fn delete_item(&self, collection: Collection, id: &str) -> Result<(), SiteError> {
        self.service.delete_item(collection, id).await
    }

    async fn save_home(&self, home: HomeContent) -> Result<HomeContent, SiteError> {
        self.service.save_home(home).await
    }
}
