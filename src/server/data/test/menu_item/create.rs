use super::*;

/// Tests creating a menu item.
///
/// Expected: Ok with every column stored
#[tokio::test]
async fn creates_menu_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);
    let item = repo.create(params("Scallops")).await?;

    assert_eq!(item.category, "Entrées");
    assert_eq!(item.name, "Scallops");
    assert_eq!(item.description, "With brown butter");
    assert_eq!(item.price, "28");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
