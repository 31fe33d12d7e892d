//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client and a service order belonging to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::client::Model, entity::service_order::Model), DbErr> {
    let client = crate::factory::client::create_client(db).await?;
    let order = crate::factory::service_order::create_service_order(db, client.id).await?;

    Ok((client, order))
}
