//! Balance data repository for database operations.
//!
//! This module provides the `BalanceRepository` for managing per-user referral
//! balances. Balances only ever change by additive delta; the increment is
//! pushed down into the database upsert so concurrent adjustments for the same
//! user cannot lose updates.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::model::balance::Balance;

/// Repository providing database operations for the balance ledger.
///
/// This struct holds a reference to the database connection and provides methods
/// for reading and adjusting balance records.
pub struct BalanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BalanceRepository<'a> {
    /// Creates a new BalanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BalanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stored balance for a user.
    ///
    /// Users without a record implicitly hold a balance of zero; reads never
    /// create records.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as a string snowflake
    ///
    /// # Returns
    /// - `Ok(f64)` - The stored balance, or 0.0 when no record exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_balance(&self, user_id: &str) -> Result<f64, DbErr> {
        let record = entity::prelude::Balance::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(record.map(|r| r.balance).unwrap_or(0.0))
    }

    /// Atomically creates-or-increments a user's balance by `delta`.
    ///
    /// The first adjustment for a user inserts a record with `delta` as the
    /// initial value; later adjustments add to the stored balance inside the
    /// upsert's conflict clause (`balance = balance + delta`), so two
    /// concurrent adjustments for the same user both land. The delta may be
    /// negative and there is no floor: balances can go below zero.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as a string snowflake
    /// - `delta` - Amount to add to the balance
    ///
    /// # Returns
    /// - `Ok(())` - Balance created or incremented
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn add_balance(&self, user_id: &str, delta: f64) -> Result<(), DbErr> {
        entity::prelude::Balance::insert(entity::balance::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            balance: ActiveValue::Set(delta),
        })
        .on_conflict(
            OnConflict::column(entity::balance::Column::UserId)
                .value(
                    entity::balance::Column::Balance,
                    // Unqualified column in the conflict clause refers to the
                    // existing row, so this renders as balance = balance + ?
                    Expr::col(entity::balance::Column::Balance).add(delta),
                )
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Returns up to `limit` balance records ordered by balance descending.
    ///
    /// Ties are broken by `user_id` ascending so the ordering is deterministic.
    /// An empty store yields an empty vec, not an error.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<Balance>)` - Ranked balance records, highest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<Balance>, DbErr> {
        let records = entity::prelude::Balance::find()
            .order_by_desc(entity::balance::Column::Balance)
            .order_by_asc(entity::balance::Column::UserId)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(Balance::from_entity).collect())
    }
}
