//! SeaORM repository implementation over the `site_documents` table

use crate::contract::{Collection, ContentItem, HomeContent};
use crate::domain::repository::{ContentRepository, HOME_COLLECTION, HOME_DOCUMENT_ID};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::document::{home_to_json, item_to_json};
use super::entity;
use super::mapper::{new_row, updated_row};

pub struct SqlContentRepository {
    db: Arc<DatabaseConnection>,
}

impl SqlContentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self, collection: &str, id: &str) -> Result<Option<entity::Model>> {
        Ok(
            entity::Entity::find_by_id((collection.to_string(), id.to_string()))
                .one(&*self.db)
                .await?,
        )
    }

    async fn upsert(&self, collection: &str, id: &str, data: Map<String, Value>) -> Result<()> {
        let now = Utc::now();
        if self.find(collection, id).await?.is_some() {
            entity::Entity::update(updated_row(collection, id, data, now))
                .exec(&*self.db)
                .await?;
        } else {
            entity::Entity::insert(new_row(collection, id, data, now, now))
                .exec(&*self.db)
                .await?;
        }
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, data: Map<String, Value>) -> Result<bool> {
        if self.find(collection, id).await?.is_none() {
            return Ok(false);
        }
        entity::Entity::update(updated_row(collection, id, data, Utc::now()))
            .exec(&*self.db)
            .await?;
        Ok(true)
    }
}

#[async_trait]
impl ContentRepository for SqlContentRepository {
    async fn get_home(&self) -> Result<Option<HomeContent>> {
        self.find(HOME_COLLECTION, HOME_DOCUMENT_ID)
            .await?
            .map(HomeContent::try_from)
            .transpose()
    }

    async fn set_home(&self, home: &HomeContent) -> Result<()> {
        self.upsert(HOME_COLLECTION, HOME_DOCUMENT_ID, home_to_json(home)?)
            .await
    }

    async fn update_home(&self, home: &HomeContent) -> Result<bool> {
        self.update(HOME_COLLECTION, HOME_DOCUMENT_ID, home_to_json(home)?)
            .await
    }

    async fn list_items(&self, collection: Collection) -> Result<Vec<ContentItem>> {
        entity::Entity::find()
            .filter(entity::Column::Collection.eq(collection.as_str()))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(ContentItem::try_from)
            .collect()
    }

    async fn get_item(&self, collection: Collection, id: &str) -> Result<Option<ContentItem>> {
        self.find(collection.as_str(), id)
            .await?
            .map(ContentItem::try_from)
            .transpose()
    }

    async fn set_item(&self, collection: Collection, item: &ContentItem) -> Result<()> {
        let data = item_to_json(item)?;
        match self.find(collection.as_str(), &item.id).await? {
            Some(_) => {
                entity::Entity::update(updated_row(collection.as_str(), &item.id, data, Utc::now()))
                    .exec(&*self.db)
                    .await?;
            }
            None => {
                let now = Utc::now();
                let row = new_row(
                    collection.as_str(),
                    &item.id,
                    data,
                    item.created_at.unwrap_or(now),
                    item.updated_at.unwrap_or(now),
                );
                entity::Entity::insert(row).exec(&*self.db).await?;
            }
        }
        Ok(())
    }

    async fn update_item(&self, collection: Collection, item: &ContentItem) -> Result<bool> {
        self.update(collection.as_str(), &item.id, item_to_json(item)?)
            .await
    }

    async fn delete_item(&self, collection: Collection, id: &str) -> Result<()> {
        entity::Entity::delete_by_id((collection.as_str().to_string(), id.to_string()))
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
