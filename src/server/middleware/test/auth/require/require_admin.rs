use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the token is valid, the user
/// exists in the database, and has the admin role.
///
/// Expected: Ok(AdminUser) with role "admin"
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::admin_user::AdminUserFactory::new(db)
        .username("head_chef")
        .build()
        .await?;
    let headers = bearer_for(&state, &user);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    let returned_user = result.unwrap();
    assert_eq!(returned_user.username, "head_chef");
    assert!(returned_user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::admin_user::AdminUserFactory::new(db)
        .role("editor")
        .build()
        .await?;
    let headers = bearer_for(&state, &user);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
