use super::*;

/// Tests activating an inactive PDF.
///
/// Expected: Ok(Some) with the target active and all others inactive
#[tokio::test]
async fn activation_is_exclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::menu_pdf::MenuPdfFactory::new(db)
        .active(true)
        .build()
        .await?;
    let target = factory::create_menu_pdf(db).await?;

    let repo = MenuPdfRepository::new(db);
    let updated = repo
        .update(
            target.id,
            UpdateMenuPdfParams {
                title: None,
                is_active: Some(true),
            },
        )
        .await?
        .unwrap();

    assert!(updated.is_active);
    assert_eq!(updated.title, target.title);
    assert_eq!(active_count(db).await?, 1);
    assert!(!repo.get_by_id(active.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests renaming without touching the active flag.
///
/// Expected: Ok(Some) with the new title and unchanged activation
#[tokio::test]
async fn renames_without_changing_activation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pdf = factory::menu_pdf::MenuPdfFactory::new(db)
        .active(true)
        .build()
        .await?;

    let repo = MenuPdfRepository::new(db);
    let updated = repo
        .update(
            pdf.id,
            UpdateMenuPdfParams {
                title: Some("Winter".to_string()),
                is_active: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Winter");
    assert!(updated.is_active);

    Ok(())
}

/// Tests updating a missing PDF.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pdf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuPdf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuPdfRepository::new(db);

    assert!(repo
        .update(1, UpdateMenuPdfParams::default())
        .await?
        .is_none());

    Ok(())
}
