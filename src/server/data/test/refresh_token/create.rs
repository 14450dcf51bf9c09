use super::*;

/// Tests storing a refresh token digest and finding it again.
///
/// Expected: Ok with the row retrievable by its hash
#[tokio::test]
async fn stores_and_finds_token_by_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin_user(db).await?;
    let expires_at = Utc::now() + Duration::days(7);

    let repo = RefreshTokenRepository::new(db);
    let token = repo.create(user.id, "digest", expires_at).await?;

    let found = repo.find_by_hash("digest").await?;

    assert_eq!(found.as_ref().map(|t| t.id), Some(token.id));
    assert_eq!(found.unwrap().admin_user_id, user.id);
    assert!(repo.find_by_hash("other").await?.is_none());

    Ok(())
}
