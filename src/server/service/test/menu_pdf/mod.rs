use entity::prelude::MenuPdf as MenuPdfEntity;
use sea_orm::{EntityTrait, PaginatorTrait};
use tempfile::TempDir;

use crate::server::{
    error::AppError,
    model::menu_pdf::UploadMenuPdfParams,
    service::menu_pdf::MenuPdfService,
    util::upload::{UploadStore, MENU_DIR},
};
use test_utils::builder::TestBuilder;

mod upload;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n%test\n";

fn upload_params(original_name: &str, bytes: &[u8], set_active: bool) -> UploadMenuPdfParams {
    UploadMenuPdfParams {
        title: None,
        original_name: original_name.to_string(),
        bytes: bytes.to_vec(),
        set_active,
    }
}

/// Tests deleting a PDF removes its file.
///
/// Expected: Ok(true) and the stored file is gone
#[tokio::test]
async fn delete_removes_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(MenuPdfEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());
    let service = MenuPdfService::new(db, &uploads);

    let pdf = service
        .upload(upload_params("dinner.pdf", PDF_BYTES, true))
        .await?;
    let path = uploads.path(MENU_DIR, &pdf.filename);
    assert!(path.exists());

    assert!(service.delete(pdf.id).await?);
    assert!(!path.exists());
    assert!(!service.delete(pdf.id).await?);

    Ok(())
}

/// Tests reading the active PDF for download.
///
/// Expected: None with no active PDF, then the bytes of the active one
#[tokio::test]
async fn reads_active_pdf() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(MenuPdfEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());
    let service = MenuPdfService::new(db, &uploads);

    service
        .upload(upload_params("draft.pdf", PDF_BYTES, false))
        .await?;
    assert!(service.read_active().await?.is_none());

    let active = service
        .upload(upload_params("dinner.pdf", PDF_BYTES, true))
        .await?;

    let (pdf, bytes) = service.read_active().await?.unwrap();
    assert_eq!(pdf.id, active.id);
    assert_eq!(bytes, PDF_BYTES);

    Ok(())
}
