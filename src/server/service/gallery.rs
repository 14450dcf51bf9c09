use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery_image::GalleryImageRepository,
    error::AppError,
    model::gallery::{CreateGalleryImageParams, GalleryImage, UpdateGalleryImageParams},
    util::{
        multipart::UploadedFile,
        upload::{image_extension, UploadStore, GALLERY_DIR},
    },
};

/// Service for gallery images, both linked by URL and uploaded.
pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Gets every image in display order
    pub async fn get_all(&self) -> Result<Vec<GalleryImage>, AppError> {
        let repo = GalleryImageRepository::new(self.db);

        let images = repo.get_all().await?;

        Ok(images.into_iter().map(GalleryImage::from_entity).collect())
    }

    /// Adds an image hosted elsewhere, appended after the last one
    pub async fn create(&self, params: CreateGalleryImageParams) -> Result<GalleryImage, AppError> {
        let repo = GalleryImageRepository::new(self.db);

        let image = repo.create(params).await?;

        Ok(GalleryImage::from_entity(image))
    }

    /// Stores an uploaded image file and appends it to the gallery.
    ///
    /// # Returns
    /// - `Ok(GalleryImage)` - Created image pointing at `/uploads/gallery/...`
    /// - `Err(AppError::BadRequest)` - File extension does not name an image type
    pub async fn upload(
        &self,
        file: UploadedFile,
        alt: String,
        title: String,
    ) -> Result<GalleryImage, AppError> {
        let Some(extension) = image_extension(&file.file_name) else {
            return Err(AppError::BadRequest(
                "Only image files are allowed".to_string(),
            ));
        };

        let stored = self.uploads.save(GALLERY_DIR, &extension, &file.bytes).await?;

        let params = CreateGalleryImageParams {
            url: stored.url,
            alt,
            title,
            filename: Some(stored.filename.clone()),
        };

        let image = match GalleryImageRepository::new(self.db).create(params).await {
            Ok(image) => image,
            Err(e) => {
                if let Err(io) = self.uploads.remove(GALLERY_DIR, &stored.filename).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", stored.filename, io);
                }
                return Err(e.into());
            }
        };

        tracing::info!("Uploaded gallery image {} ({})", image.id, stored.filename);

        Ok(GalleryImage::from_entity(image))
    }

    /// Returns None if the image doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGalleryImageParams,
    ) -> Result<Option<GalleryImage>, AppError> {
        let repo = GalleryImageRepository::new(self.db);

        let image = repo.update(id, params).await?;

        Ok(image.map(GalleryImage::from_entity))
    }

    /// Deletes the image and, for uploads, its file
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = GalleryImageRepository::new(self.db);

        let Some(image) = repo.delete(id).await? else {
            return Ok(false);
        };

        if let Some(filename) = image.filename {
            if let Err(e) = self.uploads.remove(GALLERY_DIR, &filename).await {
                tracing::warn!("Failed to remove gallery file {}: {}", filename, e);
            }
        }

        Ok(true)
    }
}
