//! Factory for balance entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a balance record with the given user ID and amount.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID for the record
/// - `balance` - Starting balance amount
///
/// # Returns
/// - `Ok(Model)` - The inserted balance record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_balance(
    db: &DatabaseConnection,
    user_id: &str,
    balance: f64,
) -> Result<entity::balance::Model, DbErr> {
    entity::balance::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        balance: ActiveValue::Set(balance),
    }
    .insert(db)
    .await
}
