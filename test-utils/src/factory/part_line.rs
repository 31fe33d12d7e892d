//! Part line factory for attaching parts to test service orders.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a part line for a service order.
///
/// # Arguments
/// - `db` - Database connection
/// - `service_order_id` - Order the line belongs to
/// - `inventory_id` - Optional inventory item the part was taken from
/// - `quantity` - Quantity used
/// - `unit_price` - Price charged per unit
///
/// # Returns
/// - `Ok(entity::part_line::Model)` - Created part line
/// - `Err(DbErr)` - Database error during insert
pub async fn create_part_line(
    db: &DatabaseConnection,
    service_order_id: i32,
    inventory_id: Option<i32>,
    quantity: f64,
    unit_price: f64,
) -> Result<entity::part_line::Model, DbErr> {
    entity::part_line::ActiveModel {
        service_order_id: ActiveValue::Set(service_order_id),
        inventory_id: ActiveValue::Set(inventory_id),
        description: ActiveValue::Set(format!("Part x{}", quantity)),
        quantity: ActiveValue::Set(quantity),
        unit_price: ActiveValue::Set(unit_price),
        ..Default::default()
    }
    .insert(db)
    .await
}
