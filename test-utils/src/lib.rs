//! Food Delivery Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! food-delivery backend. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed entity factories with sensible defaults
//! - **fixture**: In-memory entity models for pure unit tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_checkout() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_order_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
