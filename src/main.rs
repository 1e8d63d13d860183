//! Song Catalog - an HTTP service for song lyrics and metadata.
//!
//! Songs are stored in SQLite. On creation, the release date, lyrics and
//! source link are looked up from an external song info API.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod service;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("song_catalog={level},tower_http={level}"))
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    if let Err(e) = cli::run_command(&args) {
        tracing::error!(error = %e, "Fatal error");
        return Err(e);
    }
    Ok(())
}
