use super::*;

/// Tests deleting a menu PDF row.
///
/// Expected: Ok(Some) with the deleted row, then Ok(None)
#[tokio::test]
async fn returns_deleted_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pdf = factory::menu_pdf::MenuPdfFactory::new(db)
        .filename("old.pdf")
        .build()
        .await?;

    let repo = MenuPdfRepository::new(db);
    let deleted = repo.delete(pdf.id).await?;

    assert_eq!(deleted.map(|p| p.filename), Some("old.pdf".to_string()));
    assert!(repo.delete(pdf.id).await?.is_none());

    Ok(())
}
