//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row writes (service order lines, inventory detachment) run inside a transaction.

pub mod client;
pub mod inventory;
pub mod service_order;
pub mod user;

#[cfg(test)]
mod test;
