//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementation, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::enrichment::traits::SongInfoApi;
//!
//! // In production code:
//! async fn describe(api: &dyn SongInfoApi) -> Result<SongDetails, EnrichmentError> {
//!     api.fetch_details("Muse", "Starlight").await
//! }
//!
//! // In tests:
//! let api = MockSongInfo::with_details(details);
//! ```

use async_trait::async_trait;

use super::domain::{EnrichmentError, SongDetails};

/// Trait for song details lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Look up release date, text and source link for a song.
    async fn fetch_details(&self, artist: &str, title: &str)
    -> Result<SongDetails, EnrichmentError>;
}

#[async_trait]
impl SongInfoApi for super::song_info::SongInfoClient {
    async fn fetch_details(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        self.fetch_details(artist, title).await
    }
}
