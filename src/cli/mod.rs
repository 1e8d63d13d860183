//! Command-line interface for song-catalog.
//!
//! Running without a subcommand starts the HTTP API. Flags and their
//! `SONG_CATALOG_*` environment variables override the config file.

mod commands;

pub use commands::{Cli, Commands, run_command};
