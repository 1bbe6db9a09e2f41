//! The `unverify` command: operator-only, debits the inviter.
//!
//! This is the exact inverse delta of verify, but the two invocations are
//! independent: nothing checks that a matching verify was ever recorded for
//! the (member, inviter) pair, so unverify can drive a balance negative or
//! remove credit that was never granted to that pairing.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, UserId};

use crate::{bot::command::VERIFY_CREDIT, error::AppError, service::ledger::Ledger};

/// Builds the command schema. Both user options are required.
pub fn register() -> CreateCommand {
    CreateCommand::new("unverify")
        .description("Revoke a member's verification and debit their inviter")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "The member being unverified",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "inviter",
                "The user who invited the member",
            )
            .required(true),
        )
}

/// Debits the inviter and confirms with both users mentioned.
///
/// # Arguments
/// - `ledger` - Balance ledger
/// - `member` - The member being unverified
/// - `inviter` - The user losing the credit
///
/// # Returns
/// - `Ok(String)` - Public confirmation naming member and inviter
/// - `Err(AppError)` - Store failure, converted to a generic reply upstream
pub async fn run(ledger: &Ledger, member: UserId, inviter: UserId) -> Result<String, AppError> {
    ledger
        .add_balance(&inviter.get().to_string(), -VERIFY_CREDIT)
        .await?;

    Ok(format!(
        "<@{}> has been unverified. <@{}> was debited {:.2}.",
        member, inviter, VERIFY_CREDIT
    ))
}
