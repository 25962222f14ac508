//! SQLite persistence for games, decisions, achievements and the AI
//! dilemma cache.

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod legacy;
pub mod location;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool for the SQLite file at `path`.
///
/// The file (and its parent directory) is created if missing.
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations, then add columns older files are missing.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    let added = legacy::reconcile_columns(pool).await?;
    if !added.is_empty() {
        tracing::info!(columns = ?added, "Added missing legacy columns");
    }
    Ok(())
}
