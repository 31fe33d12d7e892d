//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenStore;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenStore` wraps its table in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Active bearer tokens issued at login.
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenStore) -> Self {
        Self { db, tokens }
    }
}
