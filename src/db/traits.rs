//! The storage contract used by the song service.
//!
//! Production code uses [`SqliteSongStore`](super::SqliteSongStore); tests
//! substitute the in-memory store from [`mocks`].

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewSong, Song, SongFilter};

/// Persistence operations on the `songs` table.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Whether a row with this ID exists.
    ///
    /// Query failures are returned as errors, never folded into `false`.
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Songs matching the filter, in storage order.
    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>>;

    /// The song text split into paragraphs; empty when the row is missing.
    async fn text_parts(&self, id: i64) -> Result<Vec<String>>;

    /// Insert a song and return the ID assigned by storage.
    async fn create(&self, song: &NewSong) -> Result<i64>;

    /// Overwrite every mutable field of the row with `song.id`.
    ///
    /// No existence check: a missing ID updates nothing and still succeeds.
    async fn update(&self, song: &Song) -> Result<()>;

    /// Delete by ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: i64) -> Result<()>;
}
