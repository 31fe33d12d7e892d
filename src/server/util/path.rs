use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Path parameter extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
