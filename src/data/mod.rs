//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separated from the command handlers.

pub mod balance;

#[cfg(test)]
mod test;
