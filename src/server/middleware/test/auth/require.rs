use super::*;

mod require_admin;

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(AdminUser)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::admin_user::AdminUserFactory::new(db)
        .role("editor")
        .build()
        .await?;
    let headers = bearer_for(&state, &user);

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests request with a token that does not verify.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let headers = headers_with("Bearer not.a.jwt");
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests token whose user was deleted after it was issued.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let ghost = entity::admin_user::Model {
        id: 42,
        username: "ghost".to_string(),
        password_hash: String::new(),
        role: "admin".to_string(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let headers = bearer_for(&state, &ghost);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}
