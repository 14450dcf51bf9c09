use super::*;

/// Tests that menu items are grouped by category, then by id.
///
/// Expected: Ok with items ordered by (category, id)
#[tokio::test]
async fn orders_by_category_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MenuItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let main_1 = factory::menu_item::MenuItemFactory::new(db)
        .category("Plats")
        .build()
        .await?;
    let starter = factory::menu_item::MenuItemFactory::new(db)
        .category("Entrées")
        .build()
        .await?;
    let main_2 = factory::menu_item::MenuItemFactory::new(db)
        .category("Plats")
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|i| i.id).collect();

    assert_eq!(ids, vec![starter.id, main_1.id, main_2.id]);

    Ok(())
}
