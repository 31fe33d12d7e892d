use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::AuthenticatedUser,
    service::auth::token::TokenStore,
    state::AppState,
};

pub enum Permission {
    /// Destructive operations such as deleting clients, items and orders.
    Admin,
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenStore,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenStore, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks the given permissions.
    ///
    /// The token must be active and the user it was issued for must still exist. The role
    /// is re-read from the database so role changes apply to existing tokens.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Request is authenticated and permitted
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token unknown, revoked or expired
    /// - `Err(AuthError::UserNotInDatabase)` - Token user was deleted
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(token_user) = self.tokens.resolve(token).await else {
            return Err(AuthError::InvalidToken.into());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(token_user.id).await? else {
            return Err(AuthError::UserNotInDatabase(token_user.id).into());
        };
        let user = user.into_authenticated();

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extractor for routes open to any authenticated user.
///
/// Runs `AuthGuard` before path, query and body extraction so unauthenticated requests
/// get 401 regardless of what they send.
pub struct RequireAuth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.tokens, &parts.headers)
            .require(&[])
            .await?;

        Ok(Self(user))
    }
}

/// Extractor for admin-only routes.
pub struct RequireAdmin(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.tokens, &parts.headers)
            .require(&[Permission::Admin])
            .await?;

        Ok(Self(user))
    }
}
