//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP API (the default when no subcommand is given)
//! - `admin`: Apply migrations, print or save the effective configuration

mod admin;
mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use admin::{cmd_config, cmd_migrate};
pub use serve::cmd_serve;

use crate::config::{self, Config, Overrides};
use crate::error::{Result, ResultExt};

/// Song Catalog CLI
#[derive(Parser)]
#[command(author, version, about = "Song lyrics and metadata catalog service", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: OS config dir/song-catalog/config.toml)
    #[arg(short, long, global = true, env = "SONG_CATALOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, global = true, env = "SONG_CATALOG_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true, env = "SONG_CATALOG_PORT")]
    pub port: Option<u16>,

    /// SQLite database URL (e.g. sqlite:songs.db)
    #[arg(long, global = true, env = "SONG_CATALOG_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Base URL of the song info API
    #[arg(long, global = true, env = "SONG_CATALOG_ENRICHMENT_URL")]
    pub enrichment_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP API
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Print the effective configuration as TOML
    Config {
        /// Also save it to the default config location
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            enrichment_url: self.enrichment_url.clone(),
        }
    }

    /// Load the config file and apply command-line overrides.
    pub fn effective_config(&self) -> Result<Config> {
        let mut config =
            config::load(self.config.as_deref()).with_context("loading configuration")?;
        config.apply(&self.overrides());
        Ok(config)
    }
}

/// Run the specified CLI command.
///
/// Any error here is a startup failure and ends the process.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.effective_config()?;

    match &cli.command {
        Some(Commands::Config { write }) => cmd_config(&config, *write),
        Some(Commands::Migrate) => {
            let rt = Runtime::new()?;
            cmd_migrate(&rt, &config)
        }
        Some(Commands::Serve) | None => {
            let rt = Runtime::new()?;
            cmd_serve(&rt, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::Error;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["song-catalog"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "song-catalog",
            "serve",
            "--port",
            "9000",
            "--database-url",
            "sqlite:test.db",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.database_url.as_deref(), Some("sqlite:test.db"));
    }

    #[test]
    fn test_overrides_apply_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 7000\nhost = \"127.0.0.1\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "song-catalog",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "7001",
        ])
        .unwrap();
        let config = cli.effective_config().unwrap();
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli =
            Cli::try_parse_from(["song-catalog", "--config", path.to_str().unwrap()]).unwrap();

        let err = cli.effective_config().unwrap_err();
        assert!(err.to_string().contains("loading configuration"));
        match err {
            Error::WithContext { source, .. } => {
                assert!(matches!(*source, Error::Config(ConfigError::Missing(_))));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_write_flag() {
        let cli = Cli::try_parse_from(["song-catalog", "config", "--write"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config { write: true }));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(Cli::try_parse_from(["song-catalog", "--port", "http"]).is_err());
    }
}
