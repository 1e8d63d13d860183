//! Song enrichment - fetches lyrics and metadata from an external service.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`song_info/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the external API
//! - **Traits** - The seam the song service depends on, plus test mocks
//!
//! # Usage
//!
//! ```ignore
//! use song_catalog::enrichment::SongInfoClient;
//!
//! let client = SongInfoClient::new("http://localhost:8081", Duration::from_secs(10))?;
//! let details = client.fetch_details("Muse", "Starlight").await?;
//! println!("Released: {}", details.release_date);
//! ```

pub mod domain;
pub mod song_info;
pub mod traits;

pub use domain::{EnrichmentError, SongDetails};
pub use song_info::SongInfoClient;
pub use traits::SongInfoApi;
