//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let record = factory::balance::create_balance(&db, "123456789", 0.4).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod balance;

// Re-export commonly used factory functions for concise usage
pub use balance::create_balance;
