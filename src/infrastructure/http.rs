use crate::domain::{
    errors::{LoadError, LoadResult},
    forecast::{Snapshot, repositories::SnapshotRepository},
    logging::{LogComponent, get_logger},
};
use gloo_net::http::Request;

/// HTTP client for the static `historial.json` snapshot
#[derive(Debug, Clone)]
pub struct SnapshotHttpClient {
    url: String,
}

impl SnapshotHttpClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw response body; transport and status failures become `Network`.
    async fn fetch_body(&self) -> LoadResult<String> {
        get_logger().info(
            LogComponent::Infrastructure("SnapshotHttp"),
            &format!("📡 Fetching snapshot from {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(format!("Failed to send request: {e}")))?;

        if !response.ok() {
            return Err(LoadError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(format!("Failed to read body: {e}")))
    }
}

impl SnapshotRepository for SnapshotHttpClient {
    async fn fetch_snapshot(&self) -> LoadResult<Snapshot> {
        let body = self.fetch_body().await?;
        Snapshot::from_json_str(&body)
    }
}
