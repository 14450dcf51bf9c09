//! Menu PDF factory.
//!
//! Only inserts the database row; no file is written to disk.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu PDF rows.
pub struct MenuPdfFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    filename: String,
    file_size: i64,
    is_active: bool,
}

impl<'a> MenuPdfFactory<'a> {
    /// Creates a new MenuPdfFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Menu {id}"`
    /// - filename: `"menu_{id}.pdf"`
    /// - file_size: `1024`
    /// - is_active: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Menu {}", id),
            filename: format!("menu_{}.pdf", id),
            file_size: 1024,
            is_active: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::menu_pdf::Model, DbErr> {
        entity::menu_pdf::ActiveModel {
            title: ActiveValue::Set(self.title),
            file_url: ActiveValue::Set(format!("/uploads/menu/{}", self.filename)),
            original_name: ActiveValue::Set(self.filename.clone()),
            filename: ActiveValue::Set(self.filename),
            file_size: ActiveValue::Set(self.file_size),
            is_active: ActiveValue::Set(self.is_active),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactive menu PDF row with default values.
pub async fn create_menu_pdf(db: &DatabaseConnection) -> Result<entity::menu_pdf::Model, DbErr> {
    MenuPdfFactory::new(db).build().await
}
