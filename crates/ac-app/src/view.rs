use serde::Serialize;

use ac_core::{ArtworkRecord, ErrorDisplay};

/// Everything the display layer needs to render one frame of the table.
///
/// Recomputed on every call to `CatalogBrowser::view`; in particular
/// `visible_selection` is always derived from the ledger, never cached, so
/// it cannot diverge from it.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub items: Vec<ArtworkRecord>,
    pub loading: bool,
    pub error: Option<String>,

    /// Current page, 1-based.
    pub page: u32,
    /// 0-based offset of the first visible row within the total record
    /// space, for the widget's paginator.
    pub first_row_offset: u64,
    pub page_size: u32,
    pub total_count: u64,
    pub page_size_options: Vec<u32>,

    /// The subset of `items` currently selected, in page order.
    pub visible_selection: Vec<ArtworkRecord>,

    /// How the display layer should present `error` when set.
    pub error_display: ErrorDisplay,
}
