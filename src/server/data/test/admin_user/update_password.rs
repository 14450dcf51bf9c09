use super::*;

/// Tests replacing the password hash of an admin user.
///
/// Expected: Ok(Some) with the new hash persisted
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin_user(db).await?;

    let repo = AdminUserRepository::new(db);
    let updated = repo.update_password(user.id, "new-hash").await?;

    assert!(updated.is_some());
    let stored = entity::prelude::AdminUser::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "new-hash");
    assert!(stored.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating a missing admin user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);

    assert!(repo.update_password(404, "hash").await?.is_none());

    Ok(())
}
