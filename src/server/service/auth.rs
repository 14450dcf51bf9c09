use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{admin_user::AdminUserRepository, refresh_token::RefreshTokenRepository},
    error::{auth::AuthError, AppError},
    model::admin_user::{AdminUser, LoginSession, ADMIN_ROLE},
    util::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        token::{generate_refresh_token, hash_token},
    },
};

/// Service for admin authentication and token lifecycle.
///
/// Access tokens are short-lived JWTs verified without touching the database.
/// Refresh tokens are opaque random strings; only their SHA-256 digest is stored, so a
/// leaked database cannot be used to mint sessions.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    refresh_token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Keys used to sign access tokens
    /// - `refresh_token_ttl` - Lifetime of newly issued refresh tokens
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, refresh_token_ttl: Duration) -> Self {
        Self {
            db,
            jwt,
            refresh_token_ttl,
        }
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Expired refresh tokens of every user are pruned as a side effect so the table
    /// does not grow without bound.
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - Access token, refresh token and the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession, AppError> {
        let user_repo = AdminUserRepository::new(self.db);
        let token_repo = RefreshTokenRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username.trim()).await? else {
            tracing::info!("Login attempt for unknown admin '{}'", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            tracing::info!("Failed login for admin '{}'", user.username);
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        let pruned = token_repo.delete_expired(now).await?;
        if pruned > 0 {
            tracing::debug!("Pruned {} expired refresh tokens", pruned);
        }

        let refresh_token = generate_refresh_token();
        token_repo
            .create(
                user.id,
                &hash_token(&refresh_token),
                now + self.refresh_token_ttl,
            )
            .await?;

        let user = AdminUser::from_entity(user);
        let access_token = self.jwt.issue(&user)?;

        tracing::info!("Admin '{}' logged in", user.username);

        Ok(LoginSession {
            access_token,
            refresh_token,
            expires_in: self.jwt.expires_in(),
            user,
        })
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated and stays valid until it expires or the
    /// user logs out. An expired token is deleted when presented.
    ///
    /// # Returns
    /// - `Ok((access_token, expires_in))` - Fresh access token and its lifetime in seconds
    /// - `Err(AuthError::InvalidRefreshToken)` - Unknown, expired, or orphaned token
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, i64), AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);

        let Some(stored) = token_repo.find_by_hash(&hash_token(refresh_token)).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        if stored.expires_at <= Utc::now() {
            token_repo.delete_by_id(stored.id).await?;
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let Some(user) = AdminUserRepository::new(self.db)
            .find_by_id(stored.admin_user_id)
            .await?
        else {
            token_repo.delete_by_id(stored.id).await?;
            return Err(AuthError::InvalidRefreshToken.into());
        };

        let access_token = self.jwt.issue(&AdminUser::from_entity(user))?;

        Ok((access_token, self.jwt.expires_in()))
    }

    /// Revokes every refresh token of the user, returning how many were removed.
    pub async fn logout(&self, user_id: i32) -> Result<u64, AppError> {
        let revoked = RefreshTokenRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;

        tracing::info!("Admin {} logged out, revoked {} refresh tokens", user_id, revoked);

        Ok(revoked)
    }

    /// Replaces the user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::WrongPassword)` - `current_password` did not verify
    /// - `Err(AuthError::UserNotInDatabase)` - User was deleted mid-session
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = AdminUserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(current_password, &user.password_hash) {
            return Err(AuthError::WrongPassword.into());
        }

        let hash = hash_password(new_password)?;
        repo.update_password(user_id, &hash)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        tracing::info!("Admin '{}' changed their password", user.username);

        Ok(())
    }

    /// Creates the initial admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(AdminUser))` - Account was created
    /// - `Ok(None)` - An admin already exists; nothing was changed
    pub async fn seed_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUser>, AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(None);
        }

        let hash = hash_password(password)?;
        let user = repo.create(username, &hash, ADMIN_ROLE).await?;

        Ok(Some(AdminUser::from_entity(user)))
    }
}
