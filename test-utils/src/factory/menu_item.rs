//! Menu item factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    name: String,
    description: String,
    price: String,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - category: `"Entrées"`
    /// - name: `"Dish {id}"`
    /// - description: `""`
    /// - price: `"20"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category: "Entrées".to_string(),
            name: format!("Dish {}", id),
            description: String::new(),
            price: "20".to_string(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            category: ActiveValue::Set(self.category),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values.
pub async fn create_menu_item(db: &DatabaseConnection) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}
