use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Query string extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
