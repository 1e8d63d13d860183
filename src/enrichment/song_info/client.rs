//! Song info HTTP client
//!
//! One GET per lookup, with a fixed timeout and no retries. Any failure
//! (transport, non-200 status, undecodable body) goes straight back to the
//! caller.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, SongDetails};

/// Song info API client
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SongInfoClient {
    /// Create a client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| EnrichmentError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up details for a song.
    pub async fn fetch_details(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        let response = self.send_info_request(artist, title).await?;
        Ok(adapter::to_details(response))
    }

    fn info_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_info_request(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<dto::InfoResponse, EnrichmentError> {
        let url = self.info_url(artist, title);
        tracing::debug!(%url, "Requesting song info");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        response
            .json::<dto::InfoResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
