//! The `balance` command: private lookup of the invoker's own balance.

use serenity::all::{CreateCommand, UserId};

use crate::{error::AppError, service::ledger::Ledger};

/// Builds the command schema. No arguments.
pub fn register() -> CreateCommand {
    CreateCommand::new("balance").description("Check your current referral balance")
}

/// Looks up the invoker's balance and formats it to two decimals.
///
/// # Arguments
/// - `ledger` - Balance ledger
/// - `invoker` - The invoking user's id
///
/// # Returns
/// - `Ok(String)` - Reply content with the balance
/// - `Err(AppError)` - Store failure, converted to a generic reply upstream
pub async fn run(ledger: &Ledger, invoker: UserId) -> Result<String, AppError> {
    let balance = ledger.get_balance(&invoker.get().to_string()).await?;

    Ok(format!("Your balance is {:.2}", balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// A ledger without a database still answers, with 0.00.
    #[tokio::test]
    async fn replies_zero_without_database() {
        let ledger = Ledger::new(None);

        let reply = run(&ledger, UserId::new(123456789)).await.unwrap();

        assert_eq!(reply, "Your balance is 0.00");
    }

    #[tokio::test]
    async fn replies_zero_for_uncredited_user() {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let ledger = Ledger::new(test.db.clone());

        let reply = run(&ledger, UserId::new(123456789)).await.unwrap();

        assert_eq!(reply, "Your balance is 0.00");
    }

    #[tokio::test]
    async fn formats_stored_balance_to_two_decimals() {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let ledger = Ledger::new(test.db.clone());

        ledger.add_balance("123456789", 0.2).await.unwrap();

        let reply = run(&ledger, UserId::new(123456789)).await.unwrap();

        assert_eq!(reply, "Your balance is 0.20");
    }
}
