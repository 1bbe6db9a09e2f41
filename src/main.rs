mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::ledger::Ledger};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A missing or unreachable database degrades the bot instead of killing it:
    // reads act as if the store were empty and writes are absorbed.
    let db = match &config.database_url {
        Some(url) => match startup::connect_to_database(url).await {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::error!("Failed to connect to database, running without persistence: {:?}", e);
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, running without persistence");
            None
        }
    };

    let ledger = Ledger::new(db);

    bot::start::start_bot(&config, ledger).await?;

    Ok(())
}
