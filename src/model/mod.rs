//! JSON data transfer objects exchanged over the HTTP API.
//!
//! All DTOs serialize with camelCase field names. Server-side domain models live in
//! `crate::server::model` and convert into these types at the controller boundary.

pub mod api;
pub mod client;
pub mod dashboard;
pub mod inventory;
pub mod service_order;
pub mod user;
