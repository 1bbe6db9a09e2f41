//! Domain models shared between the repository layer and command handlers.

pub mod balance;
