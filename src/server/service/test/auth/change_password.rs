use super::*;

/// Tests changing the password with the correct current password.
///
/// Verifies the new password logs in and the old one no longer does.
///
/// Expected: Ok(())
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = jwt_keys();
    let user_id = seed(db, &keys).await?;
    let service = AuthService::new(db, &keys, Duration::days(7));

    service
        .change_password(user_id, "password123", "a-much-better-one")
        .await?;

    assert!(service.login("admin", "a-much-better-one").await.is_ok());
    assert!(matches!(
        service.login("admin", "password123").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests changing the password with a wrong current password.
///
/// Expected: Err(AuthError::WrongPassword)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = jwt_keys();
    let user_id = seed(db, &keys).await?;

    let result = AuthService::new(db, &keys, Duration::days(7))
        .change_password(user_id, "not-it", "a-much-better-one")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongPassword))
    ));

    Ok(())
}
