use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{bearer_token, RequireAuth},
        service::auth::AuthService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies the credentials and issues a bearer token to be sent as
/// `Authorization: Bearer <token>` on subsequent requests.
///
/// # Returns
/// - `200 OK` - User details and token
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Credentials do not match
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoginResponseDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Log out, revoking the presented token.
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Successfully logged out"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = bearer_token(&headers) {
        AuthService::new(&state.db, &state.tokens)
            .logout(token)
            .await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(RequireAuth(user): RequireAuth) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}
