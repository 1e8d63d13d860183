//! Test utilities and fixtures for song-catalog tests.
//!
//! This module provides common test helpers, mock factories, and
//! database utilities to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::test_utils::{temp_db, insert_song};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (pool, _dir) = temp_db().await;
//!     let id = insert_song(&pool, "Muse", "Starlight", "p1\n\np2").await;
//!     // ... test logic
//! }
//! ```

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::model::{NewSong, Song};

/// Creates a temporary database for testing.
///
/// The database is created in a temporary directory that is automatically
/// cleaned up when the returned `TempDir` is dropped. Migrations are run
/// automatically.
///
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_url = crate::db::db_url(Some(&dir.path().join("test.db")));

    let pool = crate::db::init_db(&db_url, 5)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Creates a mock NewSong with sensible defaults.
///
/// Customize with struct update syntax:
///
/// ```ignore
/// let custom = NewSong {
///     artist: "Queen".to_string(),
///     ..mock_new_song()
/// };
/// ```
pub fn mock_new_song() -> NewSong {
    NewSong {
        artist: "Test Artist".to_string(),
        title: "Test Song".to_string(),
        release_date: "2023".to_string(),
        text: "Verse one\n\nChorus".to_string(),
        source_link: "https://example.com/test-song".to_string(),
    }
}

/// Creates a mock stored Song with ID 1.
pub fn mock_song() -> Song {
    mock_new_song().with_id(1)
}

/// Inserts a song directly with SQL and returns its ID.
pub async fn insert_song(pool: &SqlitePool, artist: &str, title: &str, text: &str) -> i64 {
    sqlx::query("INSERT INTO songs (artist, title, release_date, text, source_link) VALUES (?, ?, '', ?, '')")
        .bind(artist)
        .bind(title)
        .bind(text)
        .execute(pool)
        .await
        .expect("Failed to insert song")
        .last_insert_rowid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_insert_song() {
        let (pool, _dir) = temp_db().await;

        let first = insert_song(&pool, "Muse", "Starlight", "p1").await;
        let second = insert_song(&pool, "Muse", "Uprising", "p2").await;
        assert!(first > 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_mock_song_defaults() {
        let song = mock_song();
        assert_eq!(song.id, 1);
        assert_eq!(song.artist, "Test Artist");
        assert!(song.text.contains("\n\n"));
    }
}
