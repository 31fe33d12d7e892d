use chrono::{Duration, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    model::service_order::ServiceOrderStatus,
    server::{
        config::Config,
        error::AppError,
        model::{
            client::SaveClientParams,
            inventory::SaveInventoryItemParams,
            service_order::{CreateServiceOrderParams, LaborLineParams, PartLineParams},
        },
        service::{
            auth::AuthService, client::ClientService, inventory::InventoryService,
            service_order::ServiceOrderService,
        },
        state::AppState,
    },
};

const DEFAULT_LOG_FILTER: &str = "workshop=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise from `DEFAULT_LOG_FILTER`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the default accounts and, when enabled, demo data.
///
/// Default users are created only when no user exists. Demo data is only inserted into a
/// database without clients so restarts do not duplicate it.
pub async fn seed_database(state: &AppState, config: &Config) -> Result<(), AppError> {
    let created_users = AuthService::new(&state.db, &state.tokens)
        .ensure_default_users()
        .await?;
    if created_users {
        tracing::warn!("Default accounts were created; change their passwords before going live");
    }

    if !config.seed_demo_data {
        return Ok(());
    }

    let client_service = ClientService::new(&state.db);
    if !client_service.list(None).await?.is_empty() {
        tracing::info!("Skipping demo data, clients already exist");
        return Ok(());
    }

    seed_demo_data(state).await?;

    tracing::info!("Inserted demo clients, inventory and service orders");

    Ok(())
}

async fn seed_demo_data(state: &AppState) -> Result<(), AppError> {
    let client_service = ClientService::new(&state.db);
    let inventory_service = InventoryService::new(&state.db);
    let order_service = ServiceOrderService::new(&state.db);

    let mut client_ids = Vec::new();
    for (name, phone, email, vehicle, notes) in [
        ("John Smith", "(555) 010-1000", "john@example.com", "Honda Civic 2018", "Prefers text messages"),
        ("Mary Johnson", "(555) 010-2000", "mary@example.com", "Toyota Corolla 2020", "VIP client"),
        ("Charles Brown", "(555) 010-3000", "charles@example.com", "Ford Ranger 2017", "Service every 10,000 km"),
    ] {
        let client = client_service
            .create(SaveClientParams {
                name: name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                vehicle_info: Some(vehicle.to_string()),
                notes: Some(notes.to_string()),
            })
            .await?;
        client_ids.push(client.id);
    }

    let mut item_ids = Vec::new();
    for (part_number, name, quantity, minimum_stock, unit_price, location) in [
        ("OL-5W30", "Synthetic oil 5W30", 35, 10, 85.0, "Shelf A1"),
        ("FLT-AIR", "Air filter", 20, 5, 45.5, "Shelf B2"),
        ("PAD-BRAKE", "Front brake pads", 15, 6, 120.0, "Shelf C3"),
        ("BELT-TIM", "Timing belt", 3, 4, 230.0, "Shelf D1"),
        ("BAT-60", "Battery 60Ah", 12, 5, 420.0, "Yard"),
    ] {
        let item = inventory_service
            .create(SaveInventoryItemParams {
                name: name.to_string(),
                part_number: Some(part_number.to_string()),
                quantity,
                minimum_stock: Some(minimum_stock),
                unit_price,
                location: Some(location.to_string()),
            })
            .await?;
        item_ids.push(item.id);
    }

    let today = Utc::now().date_naive();

    order_service
        .create(CreateServiceOrderParams {
            client_id: Some(client_ids[0]),
            vehicle: "Honda Civic 2018".to_string(),
            description: "Full service with oil and filter change".to_string(),
            status: ServiceOrderStatus::InProgress,
            mechanic_notes: Some("Client waiting for a detailed quote".to_string()),
            scheduled_date: Some(today + Duration::days(3)),
            approved: true,
            additional_cost: 50.0,
            discount: 0.0,
            labor: vec![LaborLineParams {
                description: "Full service".to_string(),
                hours: 3.0,
                rate: 150.0,
            }],
            parts: vec![
                PartLineParams {
                    inventory_id: Some(item_ids[0]),
                    description: "Synthetic oil 5W30".to_string(),
                    quantity: 2.0,
                    unit_price: 85.0,
                },
                PartLineParams {
                    inventory_id: Some(item_ids[1]),
                    description: "Air filter".to_string(),
                    quantity: 1.0,
                    unit_price: 45.5,
                },
            ],
        })
        .await?;

    order_service
        .create(CreateServiceOrderParams {
            client_id: Some(client_ids[1]),
            vehicle: "Toyota Corolla 2020".to_string(),
            description: "Replace brake pads and inspect suspension".to_string(),
            status: ServiceOrderStatus::AwaitingApproval,
            mechanic_notes: Some("Waiting for client approval to order parts".to_string()),
            scheduled_date: Some(today + Duration::days(5)),
            approved: false,
            additional_cost: 0.0,
            discount: 0.0,
            labor: vec![LaborLineParams {
                description: "Brake and suspension work".to_string(),
                hours: 2.5,
                rate: 150.0,
            }],
            parts: vec![PartLineParams {
                inventory_id: Some(item_ids[2]),
                description: "Front brake pads".to_string(),
                quantity: 1.0,
                unit_price: 120.0,
            }],
        })
        .await?;

    order_service
        .create(CreateServiceOrderParams {
            client_id: Some(client_ids[2]),
            vehicle: "Ford Ranger 2017".to_string(),
            description: "Diagnose electronic fuel injection fault".to_string(),
            status: ServiceOrderStatus::AwaitingApproval,
            mechanic_notes: Some("Vehicle arrived on a tow truck".to_string()),
            scheduled_date: Some(today + Duration::days(2)),
            approved: false,
            additional_cost: 0.0,
            discount: 0.0,
            labor: vec![LaborLineParams {
                description: "Diagnostics".to_string(),
                hours: 2.0,
                rate: 125.0,
            }],
            parts: Vec::new(),
        })
        .await?;

    Ok(())
}
