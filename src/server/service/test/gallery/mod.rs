use entity::prelude::GalleryImage as GalleryImageEntity;
use tempfile::TempDir;

use crate::server::{
    error::AppError,
    model::gallery::CreateGalleryImageParams,
    service::gallery::GalleryService,
    util::{
        multipart::UploadedFile,
        upload::{UploadStore, GALLERY_DIR},
    },
};
use test_utils::builder::TestBuilder;

fn png(file_name: &str) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

/// Tests uploading an image stores it after the existing images.
///
/// Expected: Ok(GalleryImage) with an uploads URL and the next sort order
#[tokio::test]
async fn upload_stores_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(GalleryImageEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());
    let service = GalleryService::new(db, &uploads);

    service
        .create(CreateGalleryImageParams {
            url: "https://images.example/terrace.jpg".to_string(),
            alt: "Terrace".to_string(),
            title: "Terrace".to_string(),
            filename: None,
        })
        .await?;

    let image = service
        .upload(png("Dining Room.PNG"), "Dining room".to_string(), String::new())
        .await?;

    let filename = image.filename.clone().unwrap();
    assert!(filename.ends_with(".png"));
    assert_eq!(image.url, format!("/uploads/gallery/{}", filename));
    assert_eq!(image.sort_order, 2);
    assert!(uploads.path(GALLERY_DIR, &filename).exists());

    Ok(())
}

/// Tests uploading a file that is not an image.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn upload_rejects_non_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(GalleryImageEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());

    let result = GalleryService::new(db, &uploads)
        .upload(png("script.js"), String::new(), String::new())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting an uploaded image also removes its file.
///
/// Expected: Ok(true) and file removed
#[tokio::test]
async fn delete_removes_uploaded_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(GalleryImageEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());
    let service = GalleryService::new(db, &uploads);

    let image = service
        .upload(png("bar.jpg"), String::new(), String::new())
        .await?;
    let path = uploads.path(GALLERY_DIR, image.filename.as_deref().unwrap());

    assert!(service.delete(image.id).await?);
    assert!(!path.exists());

    Ok(())
}
