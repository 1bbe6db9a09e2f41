//! Service layer sitting between the command handlers and the repositories.

pub mod ledger;
