//! Admin user data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an admin user with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created admin user
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<entity::admin_user::Model, DbErr> {
        let now = Utc::now();

        entity::admin_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::AdminUser::find().count(self.db).await
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated admin user
    /// - `Ok(None)` - No admin user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::admin_user::ActiveModel = user.into();
        active_model.password_hash = ActiveValue::Set(password_hash.to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await.map(Some)
    }
}
