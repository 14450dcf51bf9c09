use super::*;

/// Tests looking up an existing admin by username.
///
/// Expected: Ok(Some) with the matching row
#[tokio::test]
async fn finds_existing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin_user::AdminUserFactory::new(db)
        .username("chef")
        .build()
        .await?;
    factory::create_admin_user(db).await?;

    let repo = AdminUserRepository::new(db);
    let found = repo.find_by_username("chef").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that lookups are exact and case-sensitive.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_user::AdminUserFactory::new(db)
        .username("chef")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);

    assert!(repo.find_by_username("Chef").await?.is_none());
    assert!(repo.find_by_username("waiter").await?.is_none());

    Ok(())
}
