//! Ledger service over the balance repository.
//!
//! Wraps an optional database connection so the bot can run without one. With
//! a connection every call delegates to `BalanceRepository`; without one the
//! ledger behaves like an empty store: reads return zero/empty and writes are
//! absorbed. From the outside, degraded mode is indistinguishable from an
//! empty database for read operations.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{data::balance::BalanceRepository, model::balance::Balance};

/// Persistent per-user balance store with a no-database fallback.
#[derive(Clone)]
pub struct Ledger {
    db: Option<DatabaseConnection>,
}

impl Ledger {
    /// Creates a new ledger.
    ///
    /// # Arguments
    /// - `db` - Database connection, or `None` to run without persistence
    ///
    /// # Returns
    /// - `Ledger` - New ledger instance
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Returns a user's balance, or 0.0 without a record or a database.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as a string snowflake
    ///
    /// # Returns
    /// - `Ok(f64)` - The stored balance or 0.0
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_balance(&self, user_id: &str) -> Result<f64, DbErr> {
        match &self.db {
            Some(db) => BalanceRepository::new(db).get_balance(user_id).await,
            None => Ok(0.0),
        }
    }

    /// Adds `delta` to a user's balance.
    ///
    /// Without a database the write is dropped, by design: availability wins
    /// over consistency when no store is configured.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as a string snowflake
    /// - `delta` - Amount to add, may be negative
    ///
    /// # Returns
    /// - `Ok(())` - Balance adjusted or write absorbed
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn add_balance(&self, user_id: &str, delta: f64) -> Result<(), DbErr> {
        match &self.db {
            Some(db) => BalanceRepository::new(db).add_balance(user_id, delta).await,
            None => {
                tracing::debug!(
                    "No database configured, dropping balance adjustment of {} for user {}",
                    delta,
                    user_id
                );
                Ok(())
            }
        }
    }

    /// Returns up to `limit` balances ranked highest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<Balance>)` - Ranked records; empty without records or a database
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<Balance>, DbErr> {
        match &self.db {
            Some(db) => BalanceRepository::new(db).get_leaderboard(limit).await,
            None => Ok(Vec::new()),
        }
    }
}
