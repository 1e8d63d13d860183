//! Song info API Data Transfer Objects
//!
//! These types match EXACTLY what the `/info` endpoint returns.
//! DO NOT use these types outside the song_info module - convert to domain types.

use serde::{Deserialize, Serialize};

/// `GET /info?group=..&song=..` response body
///
/// Missing and `null` fields are both accepted; the adapter turns them into
/// empty strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoResponse {
    /// Release date, free-form (e.g. "16.07.2006")
    pub release_date: Option<String>,
    /// Lyrics, paragraphs separated by a blank line
    pub text: Option<String>,
    /// Link to the source of the data
    pub link: Option<String>,
}
