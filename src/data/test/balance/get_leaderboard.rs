use super::*;

/// Tests the leaderboard on an empty store.
///
/// Verifies that an empty store yields an empty sequence rather than
/// an error.
///
/// Expected: Ok with an empty vec
#[tokio::test]
async fn returns_empty_for_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    let leaderboard = repo.get_leaderboard(15).await?;

    assert!(leaderboard.is_empty());

    Ok(())
}

/// Tests leaderboard ordering.
///
/// Verifies that records come back sorted by balance descending.
///
/// Expected: Ok with highest balance first
#[tokio::test]
async fn orders_by_balance_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "111", 0.2).await?;
    factory::balance::create_balance(db, "222", 1.0).await?;
    factory::balance::create_balance(db, "333", 0.6).await?;

    let repo = BalanceRepository::new(db);
    let leaderboard = repo.get_leaderboard(15).await?;

    let ids: Vec<&str> = leaderboard.iter().map(|b| b.user_id.as_str()).collect();
    assert_eq!(ids, vec!["222", "333", "111"]);

    Ok(())
}

/// Tests the leaderboard limit.
///
/// Verifies that no more than `limit` records are returned and that the
/// highest balances win the cut.
///
/// Expected: Ok with exactly `limit` records
#[tokio::test]
async fn limits_number_of_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "111", 0.2).await?;
    factory::balance::create_balance(db, "222", 1.0).await?;
    factory::balance::create_balance(db, "333", 0.6).await?;
    factory::balance::create_balance(db, "444", 0.8).await?;

    let repo = BalanceRepository::new(db);
    let leaderboard = repo.get_leaderboard(2).await?;

    let ids: Vec<&str> = leaderboard.iter().map(|b| b.user_id.as_str()).collect();
    assert_eq!(ids, vec!["222", "444"]);

    Ok(())
}

/// Tests the deterministic tie-break.
///
/// Verifies that equal balances are ordered by user_id ascending.
///
/// Expected: Ok with ties resolved by id
#[tokio::test]
async fn breaks_ties_by_user_id_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "333", 0.4).await?;
    factory::balance::create_balance(db, "111", 0.4).await?;
    factory::balance::create_balance(db, "222", 0.4).await?;

    let repo = BalanceRepository::new(db);
    let leaderboard = repo.get_leaderboard(15).await?;

    let ids: Vec<&str> = leaderboard.iter().map(|b| b.user_id.as_str()).collect();
    assert_eq!(ids, vec!["111", "222", "333"]);

    Ok(())
}
