use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, TransactionTrait,
};

use crate::server::model::gallery::{CreateGalleryImageParams, UpdateGalleryImageParams};

pub struct GalleryImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all gallery images in display order
    pub async fn get_all(&self) -> Result<Vec<entity::gallery_image::Model>, DbErr> {
        entity::prelude::GalleryImage::find()
            .order_by_asc(entity::gallery_image::Column::SortOrder)
            .order_by_asc(entity::gallery_image::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::gallery_image::Model>, DbErr> {
        entity::prelude::GalleryImage::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Appends an image after the current last one (`sort_order = max + 1`)
    pub async fn create(
        &self,
        params: CreateGalleryImageParams,
    ) -> Result<entity::gallery_image::Model, DbErr> {
        let txn = self.db.begin().await?;

        let sort_order = next_sort_order(&txn).await?;

        let image = entity::gallery_image::ActiveModel {
            url: ActiveValue::Set(params.url),
            alt: ActiveValue::Set(params.alt),
            title: ActiveValue::Set(params.title),
            sort_order: ActiveValue::Set(sort_order),
            filename: ActiveValue::Set(params.filename),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(image)
    }

    /// Applies a partial update; returns None if the image doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGalleryImageParams,
    ) -> Result<Option<entity::gallery_image::Model>, DbErr> {
        let Some(image) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::gallery_image::ActiveModel = image.into();
        if let Some(alt) = params.alt {
            active_model.alt = ActiveValue::Set(alt);
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(sort_order) = params.sort_order {
            active_model.sort_order = ActiveValue::Set(sort_order);
        }

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes an image row, returning it so an uploaded file can be removed
    pub async fn delete(&self, id: i32) -> Result<Option<entity::gallery_image::Model>, DbErr> {
        let Some(image) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::GalleryImage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(image))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GalleryImage::find().count(self.db).await
    }
}

async fn next_sort_order<C: ConnectionTrait>(conn: &C) -> Result<i32, DbErr> {
    let last = entity::prelude::GalleryImage::find()
        .order_by_desc(entity::gallery_image::Column::SortOrder)
        .one(conn)
        .await?;

    Ok(last.map(|image| image.sort_order.saturating_add(1)).unwrap_or(1))
}
