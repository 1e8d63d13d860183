//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the external API changes.
//! API responses get converted into these types via the adapter.

/// Details for a song obtained from the song info service.
///
/// Consumed immediately to build a stored song; never persisted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    /// Release date, free-form
    pub release_date: String,
    /// Full lyric text
    pub text: String,
    /// Link to the source of the data
    pub source_link: String,
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
