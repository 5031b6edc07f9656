//! SeaORM entity for the document table

use sea_orm::entity::prelude::*;

/// One stored document: the home singleton or a collection item
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "site_documents")]
pub struct Model {
    /// Collection key (`home`, `services`, ...)
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,

    /// Document id within the collection
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Document fields as a JSON object
    pub data: Json,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
