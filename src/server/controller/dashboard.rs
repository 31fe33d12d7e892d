use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        error::AppError, middleware::auth::RequireAuth, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the workshop overview.
///
/// Returns per-status order cards, the most recently updated orders, orders awaiting
/// approval, low stock items and headline counts.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dashboard", body = DashboardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, AppError> {
    let dashboard = DashboardService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
