use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token is unknown, revoked or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Username and password did not match a stored account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token refers to a user that no longer exists.
    ///
    /// # Fields
    /// - ID of the user the token was issued for
    #[error("User {0} from token no longer exists")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required for the operation.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied operation, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing/invalid token, bad credentials or vanished user
/// - 403 Forbidden - Authenticated user without the required role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
