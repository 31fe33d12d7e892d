use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        client::{ClientDto, ClientSearchParams, SaveClientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{RequireAdmin, RequireAuth},
        model::{client::SaveClientParams, non_blank},
        service::client::ClientService,
        state::AppState,
        util::{json::ApiJson, path::ApiPath, query::ApiQuery},
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// List clients ordered by name.
///
/// `search` matches name, phone or email, case-insensitively.
///
/// # Returns
/// - `200 OK` - Matching clients
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(ClientSearchParams),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiQuery(params): ApiQuery<ClientSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let search = non_blank(params.search);
    let clients = ClientService::new(&state.db)
        .list(search.as_deref())
        .await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a client by ID.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_client_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Create a client.
///
/// # Returns
/// - `201 Created` - Created client
/// - `400 Bad Request` - Name, phone or email missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = SaveClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(payload): ApiJson<SaveClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveClientParams::from_dto(payload);
    let client = ClientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Replace a client's details.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = SaveClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SaveClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveClientParams::from_dto(payload);
    let client = ClientService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete a client.
///
/// Clients that still have service orders cannot be deleted.
///
/// # Access Control
/// - `Admin` - Only admins can delete clients
///
/// # Returns
/// - `204 No Content` - Client deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Client not found
/// - `409 Conflict` - Client has service orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted client"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Client has service orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClientService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
