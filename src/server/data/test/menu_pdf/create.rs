use super::*;

/// Tests that creating an active PDF deactivates the previously active one.
///
/// Expected: Ok with exactly one active row, the new one
#[tokio::test]
async fn active_upload_replaces_active_pdf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let previous = factory::menu_pdf::MenuPdfFactory::new(db)
        .active(true)
        .build()
        .await?;

    let repo = MenuPdfRepository::new(db);
    let created = repo.create(params("new.pdf", true)).await?;

    assert!(created.is_active);
    assert_eq!(active_count(db).await?, 1);
    let previous = repo.get_by_id(previous.id).await?.unwrap();
    assert!(!previous.is_active);

    Ok(())
}

/// Tests that an inactive upload leaves the active PDF alone.
///
/// Expected: Ok with the original row still active
#[tokio::test]
async fn inactive_upload_keeps_active_pdf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let previous = factory::menu_pdf::MenuPdfFactory::new(db)
        .active(true)
        .build()
        .await?;

    let repo = MenuPdfRepository::new(db);
    let created = repo.create(params("draft.pdf", false)).await?;

    assert!(!created.is_active);
    assert_eq!(created.file_url, "/uploads/menu/draft.pdf");
    assert_eq!(created.file_size, 2048);
    assert_eq!(repo.get_active().await?.map(|p| p.id), Some(previous.id));

    Ok(())
}
