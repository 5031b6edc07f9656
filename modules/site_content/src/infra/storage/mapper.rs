//! Entity to model mappers
//!
//! Conversions between SeaORM rows and contract models

use crate::contract::{ContentItem, HomeContent};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use serde_json::{Map, Value};

use super::document::{home_from_json, item_from_json};
use super::entity;

impl TryFrom<entity::Model> for ContentItem {
    type Error = anyhow::Error;

    fn try_from(row: entity::Model) -> Result<Self, Self::Error> {
        let mut item = item_from_json(&row.id, row.data)?;
        // Rows written outside the app may lack the JSON timestamps
        item.created_at.get_or_insert(row.created_at);
        item.updated_at.get_or_insert(row.updated_at);
        Ok(item)
    }
}

impl TryFrom<entity::Model> for HomeContent {
    type Error = anyhow::Error;

    fn try_from(row: entity::Model) -> Result<Self, Self::Error> {
        home_from_json(row.data)
    }
}

/// Row for an insert
pub(crate) fn new_row(
    collection: &str,
    id: &str,
    data: Map<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> entity::ActiveModel {
    entity::ActiveModel {
        collection: Set(collection.to_string()),
        id: Set(id.to_string()),
        data: Set(Value::Object(data)),
        created_at: Set(created_at),
        updated_at: Set(updated_at),
    }
}

/// Row for an in-place update; `created_at` is left untouched
pub(crate) fn updated_row(
    collection: &str,
    id: &str,
    data: Map<String, Value>,
    updated_at: DateTime<Utc>,
) -> entity::ActiveModel {
    entity::ActiveModel {
        collection: Set(collection.to_string()),
        id: Set(id.to_string()),
        data: Set(Value::Object(data)),
        created_at: NotSet,
        updated_at: Set(updated_at),
    }
}
