//! Slash command schema and handlers.
//!
//! Each command lives in its own module with a `register()` function returning
//! the command schema and a `run()` function that takes the ledger plus the
//! already-parsed arguments and returns the reply content. The serenity glue
//! (deferral, option extraction, response editing) stays in the interaction
//! handler, so `run()` is unit-testable against a ledger over an in-memory
//! database.

use serenity::all::{CreateCommand, UserId};

pub mod balance;
pub mod leaderboard;
pub mod unverify;
pub mod verify;

/// Credit granted to an inviter per verified member.
///
/// Unverify applies the exact inverse, with no linkage to a prior verify: it
/// can drive a balance negative or debit credit that was never granted for
/// that pairing.
pub const VERIFY_CREDIT: f64 = 0.2;

/// Builds the full command schema for global registration.
///
/// # Returns
/// - `Vec<CreateCommand>` - Schema for all four commands
pub fn registry() -> Vec<CreateCommand> {
    vec![
        balance::register(),
        verify::register(),
        unverify::register(),
        leaderboard::register(),
    ]
}

/// Checks whether the invoking user is the configured operator.
///
/// Exact string comparison against the configured identity. Only the operator
/// may adjust balances through verify/unverify.
///
/// # Arguments
/// - `operator_id` - Configured operator identity
/// - `invoker` - The invoking user's id
///
/// # Returns
/// - `bool` - Whether the invoker is the operator
pub fn is_operator(operator_id: &str, invoker: UserId) -> bool {
    invoker.get().to_string() == operator_id
}
