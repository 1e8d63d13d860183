//! Song info API integration
//!
//! Looks up release date, lyrics and a source link for an artist/title pair.
//! The API exposes a single endpoint: `GET {base}/info?group=..&song=..`.

pub mod dto;
mod adapter;
mod client;

pub use client::SongInfoClient;
