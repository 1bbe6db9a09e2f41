//! The `leaderboard` command: public top-15 ranking of balances.

use std::fmt::Write;

use serenity::all::CreateCommand;

use crate::{error::AppError, service::ledger::Ledger};

/// Number of entries shown by the leaderboard.
pub const LEADERBOARD_LIMIT: u64 = 15;

/// Builds the command schema. No arguments.
pub fn register() -> CreateCommand {
    CreateCommand::new("leaderboard").description("Show the top referral balances")
}

/// Formats the top balances as a 1-indexed ranked list.
///
/// # Arguments
/// - `ledger` - Balance ledger
///
/// # Returns
/// - `Ok(String)` - Ranked list, or "No data yet." when the store is empty
/// - `Err(AppError)` - Store failure, converted to a generic reply upstream
pub async fn run(ledger: &Ledger) -> Result<String, AppError> {
    let entries = ledger.get_leaderboard(LEADERBOARD_LIMIT).await?;

    if entries.is_empty() {
        return Ok("No data yet.".to_string());
    }

    let mut reply = String::from("Referral leaderboard:");
    for (index, entry) in entries.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            reply,
            "\n{}. <@{}>: {:.2}",
            index + 1,
            entry.user_id,
            entry.balance
        );
    }

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn replies_no_data_for_empty_store() {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let ledger = Ledger::new(test.db.clone());

        let reply = run(&ledger).await.unwrap();

        assert_eq!(reply, "No data yet.");
    }

    #[tokio::test]
    async fn replies_no_data_without_database() {
        let ledger = Ledger::new(None);

        let reply = run(&ledger).await.unwrap();

        assert_eq!(reply, "No data yet.");
    }

    #[tokio::test]
    async fn ranks_balances_highest_first() {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::balance::create_balance(db, "111", 0.2).await.unwrap();
        factory::balance::create_balance(db, "222", 0.6).await.unwrap();

        let ledger = Ledger::new(test.db.clone());
        let reply = run(&ledger).await.unwrap();

        assert_eq!(reply, "Referral leaderboard:\n1. <@222>: 0.60\n2. <@111>: 0.20");
    }

    #[tokio::test]
    async fn shows_at_most_fifteen_entries() {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        for i in 0..20 {
            factory::balance::create_balance(db, &format!("{:03}", i), i as f64 * 0.2)
                .await
                .unwrap();
        }

        let ledger = Ledger::new(test.db.clone());
        let reply = run(&ledger).await.unwrap();

        // Header line plus fifteen ranked lines
        assert_eq!(reply.lines().count(), 16);
        assert!(reply.contains("15. "));
        assert!(!reply.contains("16. "));
    }
}
