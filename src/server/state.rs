//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Keys for signing and verifying access tokens
//! - Upload store for menu PDFs and gallery images

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    util::{jwt::JwtKeys, upload::UploadStore},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, the JWT keys
/// hold small byte buffers and the upload store is a path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer access tokens.
    pub jwt: JwtKeys,

    /// Lifetime of refresh tokens handed out at login.
    pub refresh_token_ttl: Duration,

    /// On-disk storage for uploaded files.
    pub uploads: UploadStore,
}

impl AppState {
    /// Creates a new application state from the database pool and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(
                &config.jwt_secret,
                Duration::minutes(config.access_token_ttl_minutes),
            ),
            refresh_token_ttl: Duration::days(config.refresh_token_ttl_days),
            uploads: UploadStore::new(config.upload_dir.clone()),
        }
    }
}
