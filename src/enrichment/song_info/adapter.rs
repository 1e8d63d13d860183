//! Adapter layer: Convert song info DTOs to domain models

use super::dto;
use crate::enrichment::domain::SongDetails;

/// Convert an `/info` response to [`SongDetails`]
///
/// Absent values become empty strings.
pub fn to_details(response: dto::InfoResponse) -> SongDetails {
    SongDetails {
        release_date: response.release_date.unwrap_or_default(),
        text: response.text.unwrap_or_default(),
        source_link: response.link.unwrap_or_default(),
    }
}
