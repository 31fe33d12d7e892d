use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        service_order::{
            CreateServiceOrderDto, ServiceOrderDto, ServiceOrderSearchParams,
            ServiceOrderSummaryDto, UpdateServiceOrderDto, UpdateServiceOrderStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{RequireAdmin, RequireAuth},
        model::service_order::{
            CreateServiceOrderParams, ServiceOrderFilter, UpdateServiceOrderParams,
        },
        service::service_order::ServiceOrderService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath, query::ApiQuery},
    },
};

/// Tag for grouping service order endpoints in OpenAPI documentation
pub static SERVICE_ORDER_TAG: &str = "service_order";

/// List service orders, most recently updated first.
///
/// Each summary carries the client name and the order's total cost.
///
/// # Returns
/// - `200 OK` - Matching order summaries
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/service-orders",
    tag = SERVICE_ORDER_TAG,
    params(ServiceOrderSearchParams),
    responses(
        (status = 200, description = "Successfully retrieved service orders", body = Vec<ServiceOrderSummaryDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_service_orders(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiQuery(params): ApiQuery<ServiceOrderSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ServiceOrderFilter::from_params(params);
    let orders = ServiceOrderService::new(&state.db).list(&filter).await?;

    let dtos: Vec<ServiceOrderSummaryDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a service order with its labor and part lines and computed costs.
#[utoipa::path(
    get,
    path = "/api/service-orders/{id}",
    tag = SERVICE_ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Service order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved service order", body = ServiceOrderDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_service_order_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = ServiceOrderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Open a service order.
///
/// The order code is assigned automatically. Labor and part lines are created with the
/// order in a single transaction.
///
/// # Returns
/// - `201 Created` - Created order with computed costs
/// - `400 Bad Request` - Missing fields, negative amounts, unknown client or item
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/service-orders",
    tag = SERVICE_ORDER_TAG,
    request_body = CreateServiceOrderDto,
    responses(
        (status = 201, description = "Successfully created service order", body = ServiceOrderDto),
        (status = 400, description = "Invalid service order data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_service_order(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(payload): ApiJson<CreateServiceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateServiceOrderParams::from_dto(payload);
    let order = ServiceOrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Partially update a service order.
///
/// Only fields present in the body change. `labor` and `parts`, when present, replace
/// all existing lines of that kind.
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Empty body or invalid values
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Service order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/service-orders/{id}",
    tag = SERVICE_ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Service order ID")
    ),
    request_body = UpdateServiceOrderDto,
    responses(
        (status = 200, description = "Successfully updated service order", body = ServiceOrderDto),
        (status = 400, description = "Invalid service order data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_service_order(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateServiceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateServiceOrderParams::from_dto(id, payload);
    let order = ServiceOrderService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move a service order to another status.
#[utoipa::path(
    patch,
    path = "/api/service-orders/{id}/status",
    tag = SERVICE_ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Service order ID")
    ),
    request_body = UpdateServiceOrderStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = ServiceOrderDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_service_order_status(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateServiceOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateServiceOrderParams::status_only(id, payload.status);
    let order = ServiceOrderService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete a service order together with its lines.
///
/// # Access Control
/// - `Admin` - Only admins can delete service orders
#[utoipa::path(
    delete,
    path = "/api/service-orders/{id}",
    tag = SERVICE_ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Service order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted service order"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Service order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_service_order(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ServiceOrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
