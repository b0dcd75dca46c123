use serde::{Deserialize, Serialize};

use crate::ids::ArtworkId;

/// One artwork record as fetched from the remote catalog.
///
/// Immutable once fetched; every field except `id` is optional because the
/// catalog routinely omits or nulls metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: Option<String>,
    pub artist_display: Option<String>,
    pub place_of_origin: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl ArtworkRecord {
    /// Human-readable date range for the table's Date column.
    ///
    /// Combines `date_start` and `date_end`; a missing endpoint is left out
    /// rather than rendered as a placeholder.
    pub fn date_display(&self) -> Option<String> {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => Some(start.to_string()),
            (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
            (Some(start), None) => Some(start.to_string()),
            (None, Some(end)) => Some(end.to_string()),
            (None, None) => None,
        }
    }
}
