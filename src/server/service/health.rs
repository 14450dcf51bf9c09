use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::model::health::HealthDto;

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database. An unreachable database is reported, not raised.
    pub async fn check(&self) -> HealthDto {
        let database = match self.db.ping().await {
            Ok(()) => "connected",
            Err(e) => {
                tracing::warn!("Health check could not reach the database: {}", e);
                "unreachable"
            }
        };

        HealthDto {
            status: "ok".to_string(),
            database: database.to_string(),
            timestamp: Utc::now(),
        }
    }
}
