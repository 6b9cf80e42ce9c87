//! Persistence layer and catalog repository for the inventory tracker.
//!
//! - [`repositories`]: zero-sized `*Repo` structs running parameterized SQL.
//! - [`catalog`]: the [`Catalog`](catalog::Catalog) service every front end
//!   talks to (validation, role gating, error translation).
//! - [`seed`]: idempotent bootstrap data.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod catalog;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (e.g. `sqlite://inventory.db`).
///
/// The database file is created if missing. Every connection enforces
/// foreign keys, and WAL mode lets report queries read a consistent snapshot
/// while a write is in flight.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply all pending schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
