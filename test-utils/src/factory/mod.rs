//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::client::create_client(&db).await?;
//! let order = factory::service_order::create_service_order(&db, client.id).await?;
//!
//! let (client, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::inventory_item::InventoryItemFactory::new(&db)
//!     .name("Brake pad")
//!     .quantity(2)
//!     .minimum_stock(Some(5))
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod helpers;
pub mod inventory_item;
pub mod labor_line;
pub mod part_line;
pub mod service_order;
pub mod user;

pub use client::create_client;
pub use inventory_item::create_inventory_item;
pub use labor_line::create_labor_line;
pub use part_line::create_part_line;
pub use service_order::create_service_order;
pub use user::create_user;
