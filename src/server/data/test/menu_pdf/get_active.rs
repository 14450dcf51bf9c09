use super::*;

/// Tests the active PDF lookup with no active row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_pdf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_menu_pdf(db).await?;

    let repo = MenuPdfRepository::new(db);

    assert!(repo.get_active().await?.is_none());

    Ok(())
}

/// Tests listing order of menu PDFs.
///
/// Expected: newest upload first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_menu_pdf(db).await?;
    let second = factory::create_menu_pdf(db).await?;

    let repo = MenuPdfRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
