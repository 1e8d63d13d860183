//! The `serve` command.

use tokio::runtime::Runtime;

use crate::app::AppContext;
use crate::config::Config;

/// Run the HTTP API until Ctrl-C or SIGTERM, then close the pool.
pub fn cmd_serve(rt: &Runtime, config: Config) -> anyhow::Result<()> {
    rt.block_on(async {
        let ctx = AppContext::init(config).await?;
        let result = ctx.serve().await;
        ctx.close().await;
        result?;
        Ok(())
    })
}
