//! HTTP request handlers.
//!
//! Each handler authenticates through the `RequireAuth` / `RequireAdmin` extractors, which
//! run before path, query and body extraction. It then converts request DTOs into domain
//! parameters, calls the matching service and converts the result back into a DTO.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod service_order;

#[cfg(test)]
mod test;
