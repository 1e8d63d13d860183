//! Song service - orchestrates storage and enrichment for each request.
//!
//! The only component that talks to the song info API. Everything except
//! [`SongService::create`] is a passthrough to the store with logging; the
//! HTTP layer does existence pre-checks before update, delete and text reads.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::db::SongStore;
use crate::enrichment::SongInfoApi;
use crate::error::Result;
use crate::model::{NewSong, Song, SongFilter};

/// Stateless song operations shared by all requests.
#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn SongStore>,
    song_info: Arc<dyn SongInfoApi>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, song_info: Arc<dyn SongInfoApi>) -> Self {
        Self { store, song_info }
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists = self.store.exists(id).await?;
        debug!(song_id = id, exists, "Song existence check completed");
        Ok(exists)
    }

    /// Look up details for `artist`/`title` and store the resulting song.
    ///
    /// Nothing is written if the lookup fails.
    pub async fn create(&self, artist: &str, title: &str) -> Result<Song> {
        info!(artist, title, "Adding new song");

        let details = self
            .song_info
            .fetch_details(artist, title)
            .await
            .inspect_err(|e| {
                error!(artist, title, error = %e, "Failed to fetch song details");
            })?;

        let song = NewSong {
            artist: artist.to_string(),
            title: title.to_string(),
            release_date: details.release_date,
            text: details.text,
            source_link: details.source_link,
        };

        let id = self.store.create(&song).await.inspect_err(|e| {
            error!(artist, title, error = %e, "Failed to store song");
        })?;

        info!(song_id = id, artist, title, "Song added");
        Ok(song.with_id(id))
    }

    pub async fn update(&self, song: &Song) -> Result<()> {
        info!(song_id = song.id, title = %song.title, "Updating song");
        self.store.update(song).await.inspect_err(|e| {
            error!(song_id = song.id, error = %e, "Failed to update song");
        })
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        info!(song_id = id, "Deleting song");
        self.store.delete(id).await.inspect_err(|e| {
            error!(song_id = id, error = %e, "Failed to delete song");
        })
    }

    pub async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        debug!(?filter, "Retrieving songs");
        let songs = self.store.list(filter).await.inspect_err(|e| {
            error!(?filter, error = %e, "Failed to retrieve songs");
        })?;
        info!(count = songs.len(), "Retrieved songs");
        Ok(songs)
    }

    /// Song text split into paragraphs; empty if the song is missing.
    pub async fn text_parts(&self, id: i64) -> Result<Vec<String>> {
        let parts = self.store.text_parts(id).await.inspect_err(|e| {
            error!(song_id = id, error = %e, "Failed to retrieve song text");
        })?;
        debug!(song_id = id, parts = parts.len(), "Retrieved song text");
        Ok(parts)
    }
}
