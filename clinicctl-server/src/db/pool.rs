//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Every request
//! checks a connection out of this pool and returns it when done.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low, SQLite serializes writers anyway.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://clinic.db`, `sqlite::memory:`)
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://clinic.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// In-memory databases are private to a connection, so they are pinned to a
/// single connection that is never recycled.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if is_in_memory(database_url) {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options.journal_mode(SqliteJournalMode::Wal))
        .await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
