use crate::server::{data::menu_item::MenuItemRepository, model::menu_item::SaveMenuItemParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params(name: &str) -> SaveMenuItemParams {
    SaveMenuItemParams {
        category: "Entrées".to_string(),
        name: name.to_string(),
        description: "With brown butter".to_string(),
        price: "28".to_string(),
    }
}
