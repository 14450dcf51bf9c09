use crate::server::{
    data::menu_pdf::MenuPdfRepository,
    model::menu_pdf::{CreateMenuPdfParams, UpdateMenuPdfParams},
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_active;
mod update;

fn params(filename: &str, is_active: bool) -> CreateMenuPdfParams {
    CreateMenuPdfParams {
        title: "Dinner".to_string(),
        filename: filename.to_string(),
        original_name: "dinner.pdf".to_string(),
        file_url: format!("/uploads/menu/{}", filename),
        file_size: 2048,
        is_active,
    }
}

async fn active_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::MenuPdf::find()
        .filter(entity::menu_pdf::Column::IsActive.eq(true))
        .count(db)
        .await
}
