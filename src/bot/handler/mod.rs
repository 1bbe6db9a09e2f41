use serenity::all::{Context, EventHandler, Interaction, Member, Ready};
use serenity::async_trait;

use crate::service::ledger::Ledger;

pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler.
///
/// Holds the ledger and the configured operator identity so the command and
/// join handlers receive their dependencies explicitly instead of reaching
/// for globals. This is also what makes the handlers testable against a
/// ledger over an in-memory database.
pub struct Handler {
    pub ledger: Ledger,
    pub operator_id: String,
}

impl Handler {
    pub fn new(ledger: Ledger, operator_id: String) -> Self {
        Self {
            ledger,
            operator_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.operator_id, ctx, new_member).await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.ledger, &self.operator_id, ctx, interaction)
            .await;
    }
}
