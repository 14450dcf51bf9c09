use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu_item::MenuItemRepository,
    error::AppError,
    model::menu_item::{MenuItem, SaveMenuItemParams},
};

pub struct MenuItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every menu item grouped by category
    pub async fn get_all(&self) -> Result<Vec<MenuItem>, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let items = repo.get_all().await?;

        Ok(items.into_iter().map(MenuItem::from_entity).collect())
    }

    pub async fn create(&self, params: SaveMenuItemParams) -> Result<MenuItem, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let item = repo.create(params).await?;

        Ok(MenuItem::from_entity(item))
    }

    /// Replaces every field of a menu item
    /// Returns None if the item doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: SaveMenuItemParams,
    ) -> Result<Option<MenuItem>, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let item = repo.update(id, params).await?;

        Ok(item.map(MenuItem::from_entity))
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MenuItemRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
