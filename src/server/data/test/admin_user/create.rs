use super::*;

/// Tests creating an admin user.
///
/// Verifies that the repository stores the username, hash and role and sets
/// matching created/updated timestamps.
///
/// Expected: Ok with admin user created
#[tokio::test]
async fn creates_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let user = repo.create("admin", "$argon2id$hash", "admin").await?;

    assert_eq!(user.username, "admin");
    assert_eq!(user.password_hash, "$argon2id$hash");
    assert_eq!(user.role, "admin");
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    repo.create("admin", "hash", "admin").await?;
    let result = repo.create("admin", "other", "admin").await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
