use crate::error::{config::ConfigError, AppError};

/// Application configuration loaded from the environment.
pub struct Config {
    /// Bot token used to authenticate against the Discord gateway.
    pub discord_bot_token: String,
    /// Application (client) id used for slash command registration.
    pub discord_client_id: String,
    /// Discord ID of the single user allowed to run verify/unverify.
    pub operator_id: String,
    /// Database connection string. When absent the bot runs without
    /// persistence: reads return zero/empty and writes are dropped.
    pub database_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr)` - A required variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_client_id: std::env::var("DISCORD_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?,
            operator_id: std::env::var("OPERATOR_ID")
                .map_err(|_| ConfigError::MissingEnvVar("OPERATOR_ID".to_string()))?,
            database_url: std::env::var("DATABASE_URL").ok(),
        })
    }
}
