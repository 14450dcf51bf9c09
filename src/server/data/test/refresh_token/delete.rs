use super::*;

/// Tests revoking all tokens of one admin user.
///
/// Verifies that only the given user's tokens are removed.
///
/// Expected: Ok(2) and the other user's token kept
#[tokio::test]
async fn deletes_tokens_of_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin_user(db).await?;
    let other = factory::create_admin_user(db).await?;
    let expires_at = Utc::now() + Duration::days(7);

    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "a", expires_at).await?;
    repo.create(user.id, "b", expires_at).await?;
    repo.create(other.id, "c", expires_at).await?;

    let removed = repo.delete_by_user(user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.find_by_hash("c").await?.is_some());
    assert_eq!(entity::prelude::RefreshToken::find().count(db).await?, 1);

    Ok(())
}

/// Tests pruning expired tokens.
///
/// Expected: Ok(1) with the live token kept
#[tokio::test]
async fn deletes_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin_user(db).await?;
    let now = Utc::now();

    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "expired", now - Duration::minutes(1)).await?;
    repo.create(user.id, "live", now + Duration::days(1)).await?;

    let removed = repo.delete_expired(now).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_hash("expired").await?.is_none());
    assert!(repo.find_by_hash("live").await?.is_some());

    Ok(())
}
