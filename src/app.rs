//! Process-wide context: configuration plus the database pool.
//!
//! Built once at startup and handed to the component constructors; nothing
//! here is global.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;

use crate::api;
use crate::config::Config;
use crate::db::{self, SqliteSongStore};
use crate::enrichment::SongInfoClient;
use crate::error::{Result, ResultExt};
use crate::service::SongService;

pub struct AppContext {
    pub config: Config,
    pub pool: SqlitePool,
}

impl AppContext {
    /// Connect to the database and bring the schema up to date.
    pub async fn init(config: Config) -> Result<Self> {
        let pool = db::init_db(&config.database.url, config.database.max_connections).await?;
        Ok(Self { config, pool })
    }

    /// Wire the store and the song info client into a service.
    pub fn song_service(&self) -> Result<SongService> {
        let store = SqliteSongStore::new(self.pool.clone());
        let client = SongInfoClient::new(
            self.config.enrichment.base_url.clone(),
            self.config.enrichment.timeout(),
        )?;
        Ok(SongService::new(Arc::new(store), Arc::new(client)))
    }

    /// Bind the listener and serve until a shutdown signal arrives.
    pub async fn serve(&self) -> Result<()> {
        let app = api::router(self.song_service()?, self.config.server.request_timeout());

        let addr = (self.config.server.host.as_str(), self.config.server.port);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(format!("binding {}:{}", addr.0, addr.1))?;

        tracing::info!(
            address = %listener.local_addr()?,
            enrichment = %self.config.enrichment.base_url,
            "Starting server"
        );
        api::serve(listener, app, self.config.server.shutdown_timeout())
            .await
            .with_context("serving HTTP")?;
        Ok(())
    }

    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Server gracefully stopped");
    }
}
