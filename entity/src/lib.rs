//! SeaORM entity models for the doorman database schema.

pub mod balance;
pub mod prelude;
