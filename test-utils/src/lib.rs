//! Workshop Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the workshop
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entity rows with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_client_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_workshop_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let client = factory::client::create_client(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
