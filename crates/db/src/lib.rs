//! Persistence layer: SQLite pool, migrations, row models and repositories.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// Foreign keys are enforced on every connection. See `pool_options` for
/// how in-memory databases are pooled.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    pool_options(database_url, max_connections)
        .connect_with(options)
        .await
}

/// Pool sizing and connection lifetimes for `database_url`.
///
/// An in-memory database is private to one connection and is destroyed
/// when that connection closes. It gets exactly one connection that is
/// never idled out or retired.
fn pool_options(database_url: &str, max_connections: u32) -> SqlitePoolOptions {
    if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    }
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Close a request transaction: commit on `Ok`, roll back on `Err`.
///
/// The original error is always the one returned. A rollback failure is
/// only logged. If the commit itself fails, the transaction is rolled back
/// when it drops and the commit error is returned.
pub async fn settle<T, E>(tx: Transaction<'_, Sqlite>, result: Result<T, E>) -> Result<T, E>
where
    E: From<sqlx::Error>,
{
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://todo?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://todo.db"));
    }

    #[test]
    fn in_memory_pool_keeps_its_only_connection() {
        let options = pool_options("sqlite::memory:", 5);
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn file_pool_uses_requested_size_and_default_lifetimes() {
        let options = pool_options("sqlite://todo.db", 5);
        assert_eq!(options.get_max_connections(), 5);
        assert_eq!(options.get_min_connections(), 0);
        assert!(options.get_idle_timeout().is_some());
        assert!(options.get_max_lifetime().is_some());
    }

    #[tokio::test]
    async fn in_memory_pool_is_usable() {
        let pool = create_pool("sqlite::memory:", 5).await.unwrap();
        health_check(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let options = pool.options();
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }
}
