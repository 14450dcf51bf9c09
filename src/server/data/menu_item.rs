use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::menu_item::SaveMenuItemParams;

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all menu items grouped by category, then in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find()
            .order_by_asc(entity::menu_item::Column::Category)
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: SaveMenuItemParams,
    ) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            category: ActiveValue::Set(params.category),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every editable column; returns None if the item doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: SaveMenuItemParams,
    ) -> Result<Option<entity::menu_item::Model>, DbErr> {
        let Some(item) = entity::prelude::MenuItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::menu_item::ActiveModel = item.into();
        active_model.category = ActiveValue::Set(params.category);
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.price = ActiveValue::Set(params.price);

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes a menu item; returns false if nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::MenuItem::find().count(self.db).await
    }
}
