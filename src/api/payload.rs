//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::model::Song;

/// `POST /api/songs` body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSongRequest {
    /// Artist or group name
    pub group: String,
    /// Song title
    pub song: String,
}

impl CreateSongRequest {
    /// Both fields must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.group.trim().is_empty() && !self.song.trim().is_empty()
    }
}

/// `PUT /api/songs/{id}` body; replaces every mutable field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateSongRequest {
    pub artist: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub source_link: String,
}

impl UpdateSongRequest {
    pub fn into_song(self, id: i64) -> Song {
        Song {
            id,
            artist: self.artist,
            title: self.title,
            release_date: self.release_date,
            text: self.text,
            source_link: self.source_link,
        }
    }
}

/// Status body used for both successes and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub code: u16,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            message: message.into(),
        }
    }
}

/// `GET /api/songs/{id}` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongTextResponse {
    pub text_parts: Vec<String>,
}

/// Raw `GET /api/songs/filter` query string values.
///
/// `limit`/`offset` stay strings so malformed numbers can be answered with
/// our own 400 body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub source_link: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}
