//! FAQ factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test FAQs with customizable fields.
pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    question: String,
    answer: String,
    sort_order: i32,
    is_active: bool,
}

impl<'a> FaqFactory<'a> {
    /// Creates a new FaqFactory with default values.
    ///
    /// Defaults:
    /// - question: `"Question {id}?"`
    /// - answer: `"Answer {id}."`
    /// - sort_order: `{id}`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            question: format!("Question {}?", id),
            answer: format!("Answer {}.", id),
            sort_order: id as i32,
            is_active: true,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        let now = Utc::now();
        entity::faq::ActiveModel {
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            sort_order: ActiveValue::Set(self.sort_order),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active FAQ with default values.
pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
