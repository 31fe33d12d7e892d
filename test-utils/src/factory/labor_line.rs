//! Labor line factory for attaching labor to test service orders.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a labor line for a service order.
///
/// # Arguments
/// - `db` - Database connection
/// - `service_order_id` - Order the line belongs to
/// - `hours` - Hours worked
/// - `rate` - Hourly rate
///
/// # Returns
/// - `Ok(entity::labor_line::Model)` - Created labor line
/// - `Err(DbErr)` - Database error during insert
pub async fn create_labor_line(
    db: &DatabaseConnection,
    service_order_id: i32,
    hours: f64,
    rate: f64,
) -> Result<entity::labor_line::Model, DbErr> {
    entity::labor_line::ActiveModel {
        service_order_id: ActiveValue::Set(service_order_id),
        description: ActiveValue::Set(format!("Labor {}h @ {}", hours, rate)),
        hours: ActiveValue::Set(hours),
        rate: ActiveValue::Set(rate),
        ..Default::default()
    }
    .insert(db)
    .await
}
