//! Contact message factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contact messages.
pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    subject: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> ContactFactory<'a> {
    /// Creates a new ContactFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Visitor {id}"`
    /// - subject: `"Subject {id}"`
    /// - status: `"new"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Visitor {}", id),
            subject: format!("Subject {}", id),
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            email: ActiveValue::Set(format!(
                "{}@example.com",
                self.name.to_lowercase().replace(' ', ".")
            )),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(String::new()),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set("Hello there".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a new contact message with default values.
pub async fn create_contact(db: &DatabaseConnection) -> Result<entity::contact::Model, DbErr> {
    ContactFactory::new(db).build().await
}
