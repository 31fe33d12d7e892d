use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{InventoryItemDto, InventorySearchParams, SaveInventoryItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{RequireAdmin, RequireAuth},
        model::inventory::{InventoryFilter, SaveInventoryItemParams},
        service::inventory::InventoryService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath, query::ApiQuery},
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// List inventory items ordered by name.
///
/// # Returns
/// - `200 OK` - Matching items, each flagged with `lowStock`
/// - `400 Bad Request` - Invalid query parameters
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    params(InventorySearchParams),
    responses(
        (status = 200, description = "Successfully retrieved inventory", body = Vec<InventoryItemDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiQuery(params): ApiQuery<InventorySearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = InventoryFilter::from_params(params);
    let items = InventoryService::new(&state.db).list(&filter).await?;

    let dtos: Vec<InventoryItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = InventoryItemDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_inventory_item_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = InventoryService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Create an inventory item.
///
/// Omitted quantity and unit price default to zero.
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    request_body = SaveInventoryItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_inventory_item(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(payload): ApiJson<SaveInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveInventoryItemParams::from_dto(payload);
    let item = InventoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    request_body = SaveInventoryItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = InventoryItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_inventory_item(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SaveInventoryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveInventoryItemParams::from_dto(payload);
    let item = InventoryService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete an inventory item.
///
/// Part lines referencing the item keep their description and price but lose the link.
///
/// # Access Control
/// - `Admin` - Only admins can delete items
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    InventoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
