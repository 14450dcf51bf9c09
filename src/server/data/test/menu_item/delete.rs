use super::*;

/// Tests deleting menu items.
///
/// Expected: true for an existing row, false afterwards
#[tokio::test]
async fn deletes_existing_item_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_menu_item(db).await?;

    let repo = MenuItemRepository::new(db);

    assert!(repo.delete(item.id).await?);
    assert!(!repo.delete(item.id).await?);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
