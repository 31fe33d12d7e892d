pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_user_table;
mod m20261012_000002_create_client_table;
mod m20261012_000003_create_inventory_item_table;
mod m20261012_000004_create_service_order_table;
mod m20261012_000005_create_labor_line_table;
mod m20261012_000006_create_part_line_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_user_table::Migration),
            Box::new(m20261012_000002_create_client_table::Migration),
            Box::new(m20261012_000003_create_inventory_item_table::Migration),
            Box::new(m20261012_000004_create_service_order_table::Migration),
            Box::new(m20261012_000005_create_labor_line_table::Migration),
            Box::new(m20261012_000006_create_part_line_table::Migration),
        ]
    }
}
