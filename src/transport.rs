//! HTTP transport for the storage service and the peer service

use crate::errors::{RelayError, Result};
use crate::models::{LogEntry, StatusRecord};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Single-shot HTTP calls to the relay's collaborators. No retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    storage_url: String,
    peer_url: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(
        storage_url: String,
        peer_url: Option<String>,
        http_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(http_timeout)
            .user_agent(format!("status-relay/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RelayError::Http)?;

        Ok(Self {
            client,
            storage_url,
            peer_url,
            timeout: http_timeout,
        })
    }

    fn log_url(&self) -> String {
        format!("{}/log", self.storage_url)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        timeout(self.timeout, request.send())
            .await
            .map_err(|_| RelayError::Transport(format!("{} timed out", what)))?
            .map_err(RelayError::Http)
    }

    async fn upstream_error(response: Response) -> RelayError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        RelayError::Upstream { status, body }
    }

    /// POST a record to storage as JSON
    pub async fn post_record(&self, record: &StatusRecord) -> Result<()> {
        let url = self.log_url();
        debug!("Posting status record for {} to {}", record.service, url);

        let response = self
            .send(self.client.post(&url).json(record), "storage write")
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        Ok(())
    }

    /// GET the peer's status text. `Ok(None)` when no peer is configured.
    pub async fn fetch_peer_status(&self) -> Result<Option<String>> {
        let Some(peer_url) = &self.peer_url else {
            return Ok(None);
        };
        let url = format!("{}/status", peer_url);
        debug!("Requesting peer status from {}", url);

        let response = self.send(self.client.get(&url), "peer status").await?;

        if response.status() != StatusCode::OK {
            return Err(Self::upstream_error(response).await);
        }

        let text = response.text().await.map_err(RelayError::Http)?;
        Ok(Some(text.trim().to_string()))
    }

    /// GET every stored record. A JSON body that is not an array counts as
    /// an empty log.
    pub async fn fetch_log(&self) -> Result<Vec<LogEntry>> {
        let url = self.log_url();
        debug!("Fetching log from {}", url);

        let response = self.send(self.client.get(&url), "storage read").await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let body: Value = response.json().await.map_err(RelayError::Http)?;

        match body {
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| serde_json::from_value(entry).map_err(RelayError::Json))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    /// DELETE the stored log. Anything but a 200 is reported as
    /// `RelayError::Upstream`.
    pub async fn clear_log(&self) -> Result<()> {
        let url = self.log_url();
        debug!("Clearing log at {}", url);

        let response = self.send(self.client.delete(&url), "storage clear").await?;

        if response.status() != StatusCode::OK {
            return Err(Self::upstream_error(response).await);
        }

        Ok(())
    }
}
