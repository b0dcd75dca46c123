use async_trait::async_trait;

use crate::page::ArtworkPage;

/// Port for fetching one page of catalog records.
///
/// # Behavior
/// - Stateless: no caching, no retry; each call is independent.
/// - Safe to call concurrently; staleness of overlapping fetches is the
///   caller's problem, not the port's.
/// - `page` and `page_size` must be positive. No upper bound is enforced
///   locally; the remote service defines the ceiling, and an out-of-range
///   page yields a short or empty `items` sequence.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch the given 1-based page of records.
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ArtworkPage, FetchError>;
}

/// The single error kind a fetch can produce. Carries no partial data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}
