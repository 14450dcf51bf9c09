//! Refresh token data repository.
//!
//! Only SHA-256 digests of refresh tokens are stored; lookups take the digest.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        admin_user_id: i32,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            admin_user_id: ActiveValue::Set(admin_user_id),
            token_hash: ActiveValue::Set(token_hash.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RefreshToken::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Revokes every refresh token of an admin user, returning how many were removed.
    pub async fn delete_by_user(&self, admin_user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::AdminUserId.eq(admin_user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes tokens whose expiry is at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
