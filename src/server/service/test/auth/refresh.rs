use super::*;

/// Tests exchanging a valid refresh token.
///
/// Verifies that a new access token is issued for the token's owner and that the
/// refresh token stays usable.
///
/// Expected: Ok((access_token, 900)) twice
#[tokio::test]
async fn issues_access_token_for_valid_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = jwt_keys();
    let user_id = seed(db, &keys).await?;
    let service = AuthService::new(db, &keys, Duration::days(7));

    let session = service.login("admin", "password123").await?;

    let (access_token, expires_in) = service.refresh(&session.refresh_token).await?;
    assert_eq!(expires_in, 900);
    assert_eq!(keys.verify(&access_token)?.user_id()?, user_id);

    assert!(service.refresh(&session.refresh_token).await.is_ok());

    Ok(())
}

/// Tests refresh with a token that was never issued.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_unknown_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = jwt_keys();

    let result = AuthService::new(db, &keys, Duration::days(7))
        .refresh(&generate_refresh_token())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}

/// Tests refresh with an expired token.
///
/// Verifies the expired token is rejected and deleted.
///
/// Expected: Err(AuthError::InvalidRefreshToken) and no token rows left
#[tokio::test]
async fn rejects_and_deletes_expired_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = jwt_keys();
    let user_id = seed(db, &keys).await?;

    let token = generate_refresh_token();
    RefreshTokenRepository::new(db)
        .create(user_id, &hash_token(&token), Utc::now() - Duration::seconds(1))
        .await?;

    let result = AuthService::new(db, &keys, Duration::days(7))
        .refresh(&token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));
    assert_eq!(entity::prelude::RefreshToken::find().count(db).await?, 0);

    Ok(())
}
