use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::artwork::ArtworkRecord;

/// One fetched batch of records plus the total record count known at fetch
/// time.
///
/// `total_count` is authoritative only for the moment recorded in
/// `fetched_at`; the remote catalog may mutate between fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub items: Vec<ArtworkRecord>,
    pub total_count: u64,
    pub fetched_at: DateTime<Utc>,
}

impl ArtworkPage {
    pub fn new(items: Vec<ArtworkRecord>, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
