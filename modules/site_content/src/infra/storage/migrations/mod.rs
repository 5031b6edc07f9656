//! Database migrations for the SQL document table

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_site_documents::Migration)]
    }
}

mod m20250601_000001_create_site_documents {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SiteDocuments::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(SiteDocuments::Collection).string().not_null())
                        .col(ColumnDef::new(SiteDocuments::Id).string().not_null())
                        .col(ColumnDef::new(SiteDocuments::Data).json().not_null())
                        .col(
                            ColumnDef::new(SiteDocuments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(SiteDocuments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .primary_key(
                            Index::create()
                                .col(SiteDocuments::Collection)
                                .col(SiteDocuments::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SiteDocuments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SiteDocuments {
        Table,
        Collection,
        Id,
        Data,
        CreatedAt,
        UpdatedAt,
    }
}
