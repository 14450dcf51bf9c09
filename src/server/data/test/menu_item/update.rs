use super::*;

/// Tests overwriting a menu item.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_menu_item(db).await?;

    let repo = MenuItemRepository::new(db);
    let updated = repo
        .update(
            item.id,
            SaveMenuItemParams {
                category: "Desserts".to_string(),
                name: "Soufflé".to_string(),
                description: String::new(),
                price: "16".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.category, "Desserts");
    assert_eq!(updated.name, "Soufflé");
    assert_eq!(updated.description, "");
    assert_eq!(updated.price, "16");

    Ok(())
}

/// Tests updating a missing menu item.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);

    assert!(repo.update(99, params("Ghost")).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
