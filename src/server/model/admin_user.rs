use chrono::{DateTime, Utc};

use crate::model::auth::AdminUserDto;

/// Role granted to administrators; the only role routes check for.
pub const ADMIN_ROLE: &str = "admin";

/// Administrator account without its credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn into_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.id,
            username: self.username,
            role: self.role,
        }
    }
}

/// Tokens handed out by a successful login.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminUser,
}

impl LoginSession {
    pub fn into_dto(self) -> crate::model::auth::LoginResponseDto {
        crate::model::auth::LoginResponseDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
            user: self.user.into_dto(),
        }
    }
}
