//! Interaction dispatch for the slash commands.
//!
//! Routes `interaction_create` events to the command modules. Every command
//! follows the acknowledge-then-edit contract: the interaction is deferred
//! before any store call (ephemeral for `balance`, public otherwise) and the
//! final content is filled in once the ledger responds. The operator gate for
//! verify/unverify runs before the deferral and before any store access.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction, ResolvedOption, ResolvedValue, UserId,
};

use crate::{
    bot::command::{self, balance, leaderboard, unverify, verify},
    error::AppError,
    service::ledger::Ledger,
};

/// Reply used when a store call fails after the interaction was acknowledged.
const GENERIC_ERROR_REPLY: &str = "Something went wrong, please try again later.";

/// Reply sent to non-operators invoking verify/unverify.
const NOT_OPERATOR_REPLY: &str = "You are not allowed to use this command.";

/// Handles the interaction_create event for slash command invocations.
///
/// # Arguments
/// - `ledger` - Balance ledger backing the commands
/// - `operator_id` - Configured operator identity for the privileged commands
/// - `ctx` - Discord context for sending responses
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(
    ledger: &Ledger,
    operator_id: &str,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(cmd) = interaction else {
        return;
    };

    match cmd.data.name.as_str() {
        "balance" => handle_balance(ledger, &ctx, &cmd).await,
        "verify" => handle_verify(ledger, operator_id, &ctx, &cmd).await,
        "unverify" => handle_unverify(ledger, operator_id, &ctx, &cmd).await,
        "leaderboard" => handle_leaderboard(ledger, &ctx, &cmd).await,
        other => tracing::warn!("Received unknown command: {}", other),
    }
}

/// Runs the balance command with a private (ephemeral) reply.
async fn handle_balance(ledger: &Ledger, ctx: &Context, cmd: &CommandInteraction) {
    // Acknowledge before the store call so the response window cannot expire
    if let Err(e) = cmd.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer balance reply: {:?}", e);
        return;
    }

    edit_reply(ctx, cmd, balance::run(ledger, cmd.user.id).await).await;
}

/// Runs the verify command behind the operator gate.
async fn handle_verify(ledger: &Ledger, operator_id: &str, ctx: &Context, cmd: &CommandInteraction) {
    let Some((member, inviter)) = gate_and_parse(operator_id, ctx, cmd).await else {
        return;
    };

    if let Err(e) = cmd.defer(&ctx.http).await {
        tracing::error!("Failed to defer verify reply: {:?}", e);
        return;
    }

    edit_reply(ctx, cmd, verify::run(ledger, member, inviter).await).await;
}

/// Runs the unverify command behind the operator gate.
async fn handle_unverify(
    ledger: &Ledger,
    operator_id: &str,
    ctx: &Context,
    cmd: &CommandInteraction,
) {
    let Some((member, inviter)) = gate_and_parse(operator_id, ctx, cmd).await else {
        return;
    };

    if let Err(e) = cmd.defer(&ctx.http).await {
        tracing::error!("Failed to defer unverify reply: {:?}", e);
        return;
    }

    edit_reply(ctx, cmd, unverify::run(ledger, member, inviter).await).await;
}

/// Runs the leaderboard command with a public reply.
async fn handle_leaderboard(ledger: &Ledger, ctx: &Context, cmd: &CommandInteraction) {
    if let Err(e) = cmd.defer(&ctx.http).await {
        tracing::error!("Failed to defer leaderboard reply: {:?}", e);
        return;
    }

    edit_reply(ctx, cmd, leaderboard::run(ledger).await).await;
}

/// Applies the operator gate and extracts the (member, inviter) options.
///
/// Non-operators get an immediate ephemeral rejection; the ledger is never
/// touched on that path. Returns `None` whenever the caller should stop.
async fn gate_and_parse(
    operator_id: &str,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Option<(UserId, UserId)> {
    if !command::is_operator(operator_id, cmd.user.id) {
        respond_ephemeral(ctx, cmd, NOT_OPERATOR_REPLY).await;
        return None;
    }

    let options = cmd.data.options();
    let member = user_option(&options, "member");
    let inviter = user_option(&options, "inviter");

    match (member, inviter) {
        (Some(member), Some(inviter)) => Some((member, inviter)),
        // Both options are declared required, Discord should never let this through
        _ => {
            respond_ephemeral(ctx, cmd, "Missing required user option.").await;
            None
        }
    }
}

/// Extracts a user-typed option by name.
fn user_option(options: &[ResolvedOption<'_>], name: &str) -> Option<UserId> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| match &opt.value {
            ResolvedValue::User(user, _) => Some(user.id),
            _ => None,
        })
}

/// Fills in the deferred response with the handler's reply.
///
/// A failed store call becomes a generic error line; nothing propagates out
/// of the event callback.
async fn edit_reply(ctx: &Context, cmd: &CommandInteraction, result: Result<String, AppError>) {
    let content = match result {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Command {} failed: {:?}", cmd.data.name, e);
            GENERIC_ERROR_REPLY.to_string()
        }
    };

    if let Err(e) = cmd
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!("Failed to edit {} response: {:?}", cmd.data.name, e);
    }
}

/// Sends an immediate ephemeral reply without deferring.
async fn respond_ephemeral(ctx: &Context, cmd: &CommandInteraction, content: &str) {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to send rejection for {}: {:?}", cmd.data.name, e);
    }
}
