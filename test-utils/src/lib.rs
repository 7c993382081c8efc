//! Boarding Pass Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the boarding
//! pass backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories that insert rows with sensible defaults
//! - **fixture**: In-memory data, including HostAway API payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_listing_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_listing_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
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
