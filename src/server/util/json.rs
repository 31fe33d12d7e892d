use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections render as `AppError::BadRequest`.
///
/// Behaves like `axum::Json` but keeps error bodies in the API's `{"error": ...}` shape
/// instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
