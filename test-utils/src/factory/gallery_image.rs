//! Gallery image factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating linked (not uploaded) gallery images.
pub struct GalleryImageFactory<'a> {
    db: &'a DatabaseConnection,
    url: String,
    alt: String,
    title: String,
    sort_order: i32,
}

impl<'a> GalleryImageFactory<'a> {
    /// Creates a new GalleryImageFactory with default values.
    ///
    /// Defaults:
    /// - url: `"https://images.example.com/{id}.jpg"`
    /// - alt: `"Image {id}"`
    /// - title: `""`
    /// - sort_order: `{id}`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            url: format!("https://images.example.com/{}.jpg", id),
            alt: format!("Image {}", id),
            title: String::new(),
            sort_order: id as i32,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::gallery_image::Model, DbErr> {
        entity::gallery_image::ActiveModel {
            url: ActiveValue::Set(self.url),
            alt: ActiveValue::Set(self.alt),
            title: ActiveValue::Set(self.title),
            sort_order: ActiveValue::Set(self.sort_order),
            filename: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gallery image with default values.
pub async fn create_gallery_image(
    db: &DatabaseConnection,
) -> Result<entity::gallery_image::Model, DbErr> {
    GalleryImageFactory::new(db).build().await
}
