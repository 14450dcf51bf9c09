use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImages::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryImages::Id))
                    .col(text(GalleryImages::Url))
                    .col(string(GalleryImages::Alt).default(""))
                    .col(string(GalleryImages::Title).default(""))
                    .col(integer(GalleryImages::SortOrder).default(0))
                    .col(string_null(GalleryImages::Filename))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryImages {
    Table,
    Id,
    Url,
    Alt,
    Title,
    SortOrder,
    Filename,
}
