use serenity::all::{ApplicationId, Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::ledger::Ledger,
    util::parse::parse_u64_from_string,
};

/// Starts the Discord bot in a blocking manner.
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `ledger` - Balance ledger for the command handlers to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, ledger: Ledger) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let application_id = ApplicationId::new(parse_u64_from_string(&config.discord_client_id)?);

    // Create the event handler carrying the ledger and operator identity
    let handler = Handler::new(ledger, config.operator_id.clone());

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .application_id(application_id)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
