use super::*;

/// Tests uploading a PDF stores the file and records it.
///
/// Verifies the file lands under the menu directory with a `.pdf` name, the URL
/// points at the uploads route and the title defaults to the file stem.
///
/// Expected: Ok(MenuPdf)
#[tokio::test]
async fn stores_pdf_and_records_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(MenuPdfEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());

    let pdf = MenuPdfService::new(db, &uploads)
        .upload(upload_params("Winter Menu.pdf", PDF_BYTES, true))
        .await?;

    assert_eq!(pdf.title, "Winter Menu");
    assert_eq!(pdf.original_name, "Winter Menu.pdf");
    assert!(pdf.filename.ends_with(".pdf"));
    assert_eq!(pdf.file_url, format!("/uploads/menu/{}", pdf.filename));
    assert_eq!(pdf.file_size, PDF_BYTES.len() as i64);
    assert!(pdf.is_active);
    assert_eq!(
        std::fs::read(uploads.path(MENU_DIR, &pdf.filename))?,
        PDF_BYTES
    );

    Ok(())
}

/// Tests uploading a new active PDF deactivates the previous one.
///
/// Expected: only the newest PDF is active
#[tokio::test]
async fn new_active_pdf_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(MenuPdfEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());
    let service = MenuPdfService::new(db, &uploads);

    let first = service
        .upload(upload_params("lunch.pdf", PDF_BYTES, true))
        .await?;
    let second = service
        .upload(upload_params("dinner.pdf", PDF_BYTES, true))
        .await?;

    let active = service.get_active().await?.unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);

    Ok(())
}

/// Tests uploading a file without the PDF header.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_non_pdf_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(MenuPdfEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = TempDir::new()?;
    let uploads = UploadStore::new(dir.path());

    let result = MenuPdfService::new(db, &uploads)
        .upload(upload_params("menu.pdf", b"<html>not a pdf</html>", true))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(MenuPdfEntity::find().count(db).await?, 0);
    assert!(!dir.path().join(MENU_DIR).exists());

    Ok(())
}
