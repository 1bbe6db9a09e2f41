use super::*;

/// Tests the first balance adjustment for a user.
///
/// Verifies that a record is created lazily with the delta as its initial
/// value when no record exists yet.
///
/// Expected: Ok with balance equal to the first delta
#[tokio::test]
async fn creates_record_on_first_adjustment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    repo.add_balance("123456789", 0.2).await?;

    assert_eq!(repo.get_balance("123456789").await?, 0.2);

    Ok(())
}

/// Tests that repeated adjustments accumulate.
///
/// Verifies that each delta is added to the stored balance rather than
/// overwriting it, including negative deltas.
///
/// Expected: Ok with the sum of all deltas
#[tokio::test]
async fn accumulates_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    repo.add_balance("123456789", 0.2).await?;
    repo.add_balance("123456789", 0.2).await?;
    repo.add_balance("123456789", -0.2).await?;
    repo.add_balance("123456789", 0.2).await?;

    let balance = repo.get_balance("123456789").await?;
    assert!((balance - 0.6).abs() < 1e-9);

    Ok(())
}

/// Tests that an inverse delta restores the prior balance.
///
/// Verifies that adding +0.2 followed by -0.2 returns the balance to its
/// pre-adjustment value within floating tolerance.
///
/// Expected: Ok with the seeded balance restored
#[tokio::test]
async fn inverse_delta_restores_prior_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::balance::create_balance(db, "123456789", 1.0).await?;

    let repo = BalanceRepository::new(db);
    repo.add_balance("123456789", 0.2).await?;
    repo.add_balance("123456789", -0.2).await?;

    let balance = repo.get_balance("123456789").await?;
    assert!((balance - 1.0).abs() < 1e-9);

    Ok(())
}

/// Tests debiting a user that was never credited.
///
/// Verifies that a negative first delta creates the record with a negative
/// balance. There is no linkage to a prior credit and no floor at zero.
///
/// Expected: Ok with a negative balance
#[tokio::test]
async fn allows_negative_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    repo.add_balance("123456789", -0.2).await?;

    let balance = repo.get_balance("123456789").await?;
    assert!((balance + 0.2).abs() < 1e-9);

    Ok(())
}

/// Tests that adjustments for different users stay independent.
///
/// Verifies that interleaved adjustments for two users never leak into
/// each other's records.
///
/// Expected: Ok with each user holding the sum of their own deltas
#[tokio::test]
async fn keeps_users_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BalanceRepository::new(db);
    repo.add_balance("111", 0.2).await?;
    repo.add_balance("222", 0.2).await?;
    repo.add_balance("111", 0.2).await?;
    repo.add_balance("222", -0.2).await?;

    assert!((repo.get_balance("111").await? - 0.4).abs() < 1e-9);
    assert!(repo.get_balance("222").await?.abs() < 1e-9);

    Ok(())
}
