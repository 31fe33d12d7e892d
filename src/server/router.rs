use axum::{
    http::{header, Method},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, client, dashboard, inventory, service_order, user},
    server::{
        controller::{
            auth as auth_controller,
            client as client_controller,
            dashboard as dashboard_controller,
            health as health_controller,
            inventory as inventory_controller,
            service_order as service_order_controller,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Workshop API", description = "Clients, inventory and service orders of a repair workshop"),
    paths(
        health_controller::health,
        auth_controller::login,
        auth_controller::logout,
        auth_controller::get_user,
        dashboard_controller::get_dashboard,
        client_controller::get_clients,
        client_controller::get_client_by_id,
        client_controller::create_client,
        client_controller::update_client,
        client_controller::delete_client,
        inventory_controller::get_inventory,
        inventory_controller::get_inventory_item_by_id,
        inventory_controller::create_inventory_item,
        inventory_controller::update_inventory_item,
        inventory_controller::delete_inventory_item,
        service_order_controller::get_service_orders,
        service_order_controller::get_service_order_by_id,
        service_order_controller::create_service_order,
        service_order_controller::update_service_order,
        service_order_controller::update_service_order_status,
        service_order_controller::delete_service_order,
    ),
    components(schemas(
        api::ErrorDto,
        api::HealthDto,
        user::UserRole,
        user::LoginDto,
        user::UserDto,
        user::LoginResponseDto,
        client::ClientDto,
        client::SaveClientDto,
        inventory::InventoryItemDto,
        inventory::SaveInventoryItemDto,
        service_order::ServiceOrderStatus,
        service_order::LaborLineDto,
        service_order::PartLineDto,
        service_order::LaborLineInputDto,
        service_order::PartLineInputDto,
        service_order::ServiceOrderSummaryDto,
        service_order::ServiceOrderDto,
        service_order::CreateServiceOrderDto,
        service_order::UpdateServiceOrderDto,
        service_order::UpdateServiceOrderStatusDto,
        dashboard::StatusCardDto,
        dashboard::DashboardCountsDto,
        dashboard::DashboardDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Login and token management"),
        (name = "dashboard", description = "Workshop overview"),
        (name = "client", description = "Client records"),
        (name = "inventory", description = "Parts inventory"),
        (name = "service_order", description = "Service orders with labor and parts"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_controller::health))
        .route("/api/login", post(auth_controller::login))
        .route("/api/logout", post(auth_controller::logout))
        .route("/api/me", get(auth_controller::get_user))
        .route("/api/dashboard", get(dashboard_controller::get_dashboard))
        .route(
            "/api/clients",
            get(client_controller::get_clients).post(client_controller::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(client_controller::get_client_by_id)
                .put(client_controller::update_client)
                .delete(client_controller::delete_client),
        )
        .route(
            "/api/inventory",
            get(inventory_controller::get_inventory)
                .post(inventory_controller::create_inventory_item),
        )
        .route(
            "/api/inventory/{id}",
            get(inventory_controller::get_inventory_item_by_id)
                .put(inventory_controller::update_inventory_item)
                .delete(inventory_controller::delete_inventory_item),
        )
        .route(
            "/api/service-orders",
            get(service_order_controller::get_service_orders)
                .post(service_order_controller::create_service_order),
        )
        .route(
            "/api/service-orders/{id}",
            get(service_order_controller::get_service_order_by_id)
                .put(service_order_controller::update_service_order)
                .delete(service_order_controller::delete_service_order),
        )
        .route(
            "/api/service-orders/{id}/status",
            patch(service_order_controller::update_service_order_status),
        )
}

/// Builds the complete application: API routes, Swagger UI, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
