use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuPdfs::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuPdfs::Id))
                    .col(string(MenuPdfs::Title))
                    .col(string_uniq(MenuPdfs::Filename))
                    .col(string(MenuPdfs::OriginalName))
                    .col(string(MenuPdfs::FileUrl))
                    .col(big_integer(MenuPdfs::FileSize))
                    .col(boolean(MenuPdfs::IsActive).default(false))
                    .col(
                        timestamp(MenuPdfs::UploadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuPdfs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuPdfs {
    Table,
    Id,
    Title,
    Filename,
    OriginalName,
    FileUrl,
    FileSize,
    IsActive,
    UploadedAt,
}
