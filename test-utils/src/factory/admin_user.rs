//! Admin user factory.
//!
//! The stored password hash defaults to a placeholder that never verifies; tests that
//! log in should create the user through the auth service so the hash is real.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admin users with customizable fields.
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    role: String,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new AdminUserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"admin_{id}"`
    /// - password_hash: `"unusable"`
    /// - role: `"admin"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("admin_{}", id),
            password_hash: "unusable".to_string(),
            role: "admin".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the admin user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin_user::Model)` - Created admin user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        let now = Utc::now();
        entity::admin_user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin user with default values.
pub async fn create_admin_user(db: &DatabaseConnection) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
