use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::user::AuthenticatedUser,
    service::auth::token::TokenStore,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::EntityTrait;
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};

mod bearer;
mod require;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

async fn token_for(tokens: &TokenStore, user: &entity::user::Model) -> String {
    tokens
        .issue(AuthenticatedUser {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role.parse().unwrap(),
        })
        .await
}
