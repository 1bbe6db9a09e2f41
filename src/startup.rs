use crate::error::AppError;

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the provided connection
/// string, then runs all pending SeaORM migrations so the `balances` schema
/// exists before the bot starts handling events. Migration is idempotent and
/// safe to repeat on every startup.
///
/// # Arguments
/// - `database_url` - Database connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
