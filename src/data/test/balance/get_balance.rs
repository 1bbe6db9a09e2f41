use super::*;

/// Tests reading a balance for a user with no record.
///
/// Verifies that users who were never credited implicitly hold a balance
/// of zero and that the read does not create a record.
///
/// Expected: Ok with 0.0 and no record materialized
#[tokio::test]
async fn returns_zero_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    let balance = repo.get_balance("123456789").await?;

    assert_eq!(balance, 0.0);

    // Reads never create records
    let leaderboard = repo.get_leaderboard(10).await?;
    assert!(leaderboard.is_empty());

    Ok(())
}

/// Tests reading a stored balance.
///
/// Verifies that an existing record's balance is returned as stored.
///
/// Expected: Ok with the seeded amount
#[tokio::test]
async fn returns_stored_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "123456789", 1.4).await?;

    let repo = BalanceRepository::new(db);
    let balance = repo.get_balance("123456789").await?;

    assert_eq!(balance, 1.4);

    Ok(())
}

/// Tests that balances are isolated per user.
///
/// Verifies that reading one user's balance is unaffected by records
/// stored for other users.
///
/// Expected: Ok with each user's own amount
#[tokio::test]
async fn returns_balance_for_requested_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "111", 0.2).await?;
    factory::balance::create_balance(db, "222", 0.6).await?;

    let repo = BalanceRepository::new(db);

    assert_eq!(repo.get_balance("111").await?, 0.2);
    assert_eq!(repo.get_balance("222").await?, 0.6);
    assert_eq!(repo.get_balance("333").await?, 0.0);

    Ok(())
}
