use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(pk_auto(Faqs::Id))
                    .col(text(Faqs::Question))
                    .col(text(Faqs::Answer))
                    .col(integer(Faqs::SortOrder).default(0))
                    .col(boolean(Faqs::IsActive).default(true))
                    .col(
                        timestamp(Faqs::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Faqs::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faqs {
    Table,
    Id,
    Question,
    Answer,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
