//! Core data models for the song catalog.
//!
//! Defines the persisted [`Song`] entity, the [`NewSong`] insert shape and the
//! transient [`SongFilter`] query descriptor.
//!
//! # Database Schema
//!
//! The models map to a single table:
//! - `songs` - One row per song, `id` generated by the database

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Song {
    /// Database ID (auto-generated, immutable)
    pub id: i64,
    /// Performing artist or group
    pub artist: String,
    /// Song title
    pub title: String,
    /// Release date, free-form (never parsed)
    pub release_date: String,
    /// Full lyric text, paragraphs separated by a blank line
    pub text: String,
    /// Link to where the metadata came from
    pub source_link: String,
}

/// A song that has not been stored yet (no ID).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub artist: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub source_link: String,
}

impl NewSong {
    /// Attach the ID the database assigned.
    pub fn with_id(self, id: i64) -> Song {
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

/// Filter and pagination bounds for listing songs.
///
/// `None` or an empty string means "no constraint" for that field.
/// `limit == 0` means no limit, `offset == 0` means start from the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    /// Case-sensitive substring match
    pub artist: Option<String>,
    /// Case-sensitive substring match
    pub title: Option<String>,
    /// Exact match
    pub release_date: Option<String>,
    /// Case-sensitive substring match
    pub text: Option<String>,
    /// Exact match
    pub source_link: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl SongFilter {
    pub fn artist(&self) -> Option<&str> {
        constraint(&self.artist)
    }

    pub fn title(&self) -> Option<&str> {
        constraint(&self.title)
    }

    pub fn release_date(&self) -> Option<&str> {
        constraint(&self.release_date)
    }

    pub fn text(&self) -> Option<&str> {
        constraint(&self.text)
    }

    pub fn source_link(&self) -> Option<&str> {
        constraint(&self.source_link)
    }

    /// Whether the song satisfies every field constraint (pagination ignored).
    pub fn matches(&self, song: &Song) -> bool {
        self.artist().is_none_or(|v| song.artist.contains(v))
            && self.title().is_none_or(|v| song.title.contains(v))
            && self.text().is_none_or(|v| song.text.contains(v))
            && self.release_date().is_none_or(|v| song.release_date == v)
            && self.source_link().is_none_or(|v| song.source_link == v)
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
