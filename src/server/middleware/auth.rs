//! Bearer token guard for admin routes.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    model::admin_user::AdminUser,
    state::AppState,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request's bearer token and checks every permission.
    ///
    /// The token must verify and its subject must still exist in the database, so
    /// deleting an admin invalidates their outstanding access tokens.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<AdminUser, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.state.jwt.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = AdminUserRepository::new(&self.state.db)
            .find_by_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = AdminUser::from_entity(user);

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User with role '{}' requires admin role", user.role),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
