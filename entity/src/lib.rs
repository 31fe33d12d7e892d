//! SeaORM entity definitions for the workshop database.

pub mod prelude;

pub mod client;
pub mod inventory_item;
pub mod labor_line;
pub mod part_line;
pub mod service_order;
pub mod user;
