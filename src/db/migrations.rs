use sqlx::{Pool, Postgres};
use tracing::info;

/// Run all pending database migrations
///
/// Embeds the SQL files from the migrations directory and applies them to
/// the database. Safe to run multiple times; sqlx tracks which migrations
/// have already been applied.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations...");

    // sqlx::migrate!() embeds migrations at compile time
    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    info!("Database migrations completed");
    Ok(())
}
