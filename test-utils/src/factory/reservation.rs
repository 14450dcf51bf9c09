//! Reservation factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    date: String,
    guests: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Guest {id}"`
    /// - email: `"guest{id}@example.com"`
    /// - date: `"2026-12-24"`
    /// - guests: `"2"`
    /// - status: `"pending"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Guest {}", id),
            email: format!("guest{}@example.com", id),
            date: "2026-12-24".to_string(),
            guests: "2".to_string(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            date: ActiveValue::Set(self.date),
            guests: ActiveValue::Set(self.guests),
            requirements: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db).build().await
}
