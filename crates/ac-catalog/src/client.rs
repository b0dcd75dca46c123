use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use ac_core::{ArtworkPage, ArtworkRecord, CatalogPort, FetchError};

use crate::dto::ArtworksResponse;

const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Reqwest-backed catalog client.
///
/// Stateless beyond the connection pool: no caching, no retry, no backoff.
/// A failed call is reported once and recovery is the caller's next fetch.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage, FetchError> {
        if page == 0 || page_size == 0 {
            return Err(FetchError::InvalidRequest(format!(
                "page and page_size must be positive (got page={}, page_size={})",
                page, page_size
            )));
        }

        let url = format!("{}/artworks", self.base_url);
        debug!("fetching catalog page {} (limit {})", page, page_size);

        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("limit", page_size)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("catalog returned status {} for page {}", status, page);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: ArtworksResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let items: Vec<ArtworkRecord> = body.data.into_iter().map(Into::into).collect();
        debug!(
            "fetched {} records, total {}",
            items.len(),
            body.pagination.total
        );
        Ok(ArtworkPage::new(items, body.pagination.total))
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}
