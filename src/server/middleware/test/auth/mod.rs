use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::admin_user::AdminUser,
    state::AppState,
    util::{jwt::JwtKeys, upload::UploadStore},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn state(db: &DatabaseConnection) -> AppState {
    AppState {
        db: db.clone(),
        jwt: JwtKeys::new(SECRET, Duration::minutes(15)),
        refresh_token_ttl: Duration::days(7),
        uploads: UploadStore::new("uploads"),
    }
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn bearer_for(state: &AppState, user: &entity::admin_user::Model) -> HeaderMap {
    let token = state
        .jwt
        .issue(&AdminUser::from_entity(user.clone()))
        .unwrap();
    headers_with(&format!("Bearer {}", token))
}

#[test]
fn extracts_bearer_token() {
    assert_eq!(bearer_token(&headers_with("Bearer abc")), Some("abc"));
    assert_eq!(bearer_token(&headers_with("Basic abc")), None);
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
