//! Maintenance commands: schema migrations and config inspection.

use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::db;
use crate::error::ResultExt;

/// Apply pending migrations to the configured database.
pub fn cmd_migrate(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    rt.block_on(async {
        let pool = db::connect(&config.database.url, 1).await?;
        db::run_migrations(&pool).await?;
        pool.close().await;
        println!("Migrations applied to {}", config.database.url);
        Ok(())
    })
}

/// Print the effective config, optionally saving it as the default file.
pub fn cmd_config(config: &Config, write: bool) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);

    if write {
        let path = config::save(config).with_context("saving configuration")?;
        println!("\nSaved to {}", path.display());
    }
    Ok(())
}
