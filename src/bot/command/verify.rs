//! The `verify` command: operator-only, credits the inviter.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, UserId};

use crate::{bot::command::VERIFY_CREDIT, error::AppError, service::ledger::Ledger};

/// Builds the command schema. Both user options are required.
pub fn register() -> CreateCommand {
    CreateCommand::new("verify")
        .description("Mark a member as verified and credit their inviter")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "The member being verified",
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

/// Credits the inviter and confirms with both users mentioned.
///
/// The operator gate has already run by the time this is called.
///
/// # Arguments
/// - `ledger` - Balance ledger
/// - `member` - The member being verified
/// - `inviter` - The user receiving the credit
///
/// # Returns
/// - `Ok(String)` - Public confirmation naming member and inviter
/// - `Err(AppError)` - Store failure, converted to a generic reply upstream
pub async fn run(ledger: &Ledger, member: UserId, inviter: UserId) -> Result<String, AppError> {
    ledger
        .add_balance(&inviter.get().to_string(), VERIFY_CREDIT)
        .await?;

    Ok(format!(
        "<@{}> has been verified. <@{}> was credited {:.2}.",
        member, inviter, VERIFY_CREDIT
    ))
}
