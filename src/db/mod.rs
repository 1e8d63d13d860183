//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides:
//! - Pool construction and schema migrations
//! - The [`SongStore`] trait, the storage contract the service depends on
//! - [`SqliteSongStore`], its production implementation
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::db::{init_db, SqliteSongStore};
//!
//! let pool = init_db("sqlite:songs.db", 5).await?;
//! let store = SqliteSongStore::new(pool);
//! ```

mod songs;
pub mod traits;

pub use songs::SqliteSongStore;
pub use traits::SongStore;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{Result, ResultExt};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "songs.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Open a connection pool, creating the database file if needed.
///
/// # Errors
///
/// Returns an error if database creation fails or no connection can be
/// established.
pub async fn connect(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!(url = db_url, "Creating database");
        sqlx::Sqlite::create_database(db_url)
            .await
            .with_context(format!("creating database {db_url}"))?;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await
        .with_context(format!("connecting to {db_url}"))
}

/// Apply pending migrations from `./migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .with_context("applying migrations")?;
    tracing::info!("Database schema is up to date");
    Ok(())
}

/// Initialize the database connection pool and run migrations.
pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = connect(db_url, max_connections).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_url() {
        assert_eq!(db_url(None), "sqlite:songs.db");
        assert_eq!(
            db_url(Some(std::path::Path::new("/tmp/x.db"))),
            "sqlite:/tmp/x.db"
        );
    }

    #[tokio::test]
    async fn test_init_db_creates_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let url = db_url(Some(&db_path));

        let pool = init_db(&url, 1).await.expect("Failed to init db");
        assert!(db_path.exists());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(&pool)
            .await
            .expect("songs table should exist");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let url = db_url(Some(&temp_dir.path().join("test.db")));

        let pool = init_db(&url, 1).await.unwrap();
        run_migrations(&pool).await.expect("second run is a no-op");
    }
}
