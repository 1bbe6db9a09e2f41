//! Discord bot integration for onboarding and the referral ledger.
//!
//! This module wires the serenity gateway client to the application: the
//! ready handler registers the slash command schema, the interaction handler
//! dispatches the four commands (balance, verify, unverify, leaderboard), and
//! the member handler provisions a private onboarding channel for every new
//! guild member.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guilds and channels
//! - `GUILD_MEMBERS` - Receive member-join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
