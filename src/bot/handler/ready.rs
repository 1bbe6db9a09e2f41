//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway. Command registration happens
//! here: `set_global_commands` replaces the full global schema, so repeating
//! it on every (re)connect is safe. A registration failure is logged and the
//! bot keeps running in degraded mode with whatever schema Discord last saw.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for registering the command schema
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::registry()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
