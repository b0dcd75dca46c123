use std::sync::Arc;

use tracing::{debug, info, warn};

use ac_core::{
    ArtworkPage, ArtworkRecord, BrowseConfig, CatalogPort, FailurePolicy, FetchError,
    PaginationState, SelectionLedger,
};

use crate::view::TableView;

/// Message shown to the user when a fetch fails; the real diagnostic goes to
/// the log only.
const FETCH_ERROR_MESSAGE: &str = "Failed to load artworks data.";

/// Snapshot of the pagination state a fetch was issued under.
///
/// `generation` is what makes completions comparable: it increases on every
/// `begin_fetch`, and a completion whose generation no longer matches the
/// browser's current one is stale and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub page: u32,
    pub page_size: u32,
}

/// One browsing session over the catalog.
///
/// Owns the pagination state, the selection ledger, and the current page of
/// records; the display layer only ever sees the `TableView` projection and
/// feeds events back through the methods here. Single logical owner: all
/// mutation is synchronous, and the only suspension point is the catalog
/// call inside `refresh`.
///
/// The fetch lifecycle is split in two (`begin_fetch` / `complete_fetch`) so
/// an event loop that spawns its own fetches gets the stale-discard rule for
/// free; `refresh` is the convenience path that does both around one port
/// call.
pub struct CatalogBrowser {
    catalog: Arc<dyn CatalogPort>,
    config: BrowseConfig,
    pagination: PaginationState,
    ledger: SelectionLedger,
    items: Vec<ArtworkRecord>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<dyn CatalogPort>, config: BrowseConfig) -> Self {
        let pagination = PaginationState::new(config.initial_page_size);
        Self {
            catalog,
            config,
            pagination,
            ledger: SelectionLedger::new(),
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Initial load: fetch page 1 with the configured page size.
    #[tracing::instrument(name = "browser.start", skip(self))]
    pub async fn start(&mut self) {
        self.refresh().await;
    }

    // =========================================================================
    // Navigation events
    // =========================================================================

    #[tracing::instrument(name = "browser.next_page", skip(self))]
    pub async fn next_page(&mut self) {
        self.pagination.go_to_next();
        self.refresh().await;
    }

    #[tracing::instrument(name = "browser.previous_page", skip(self))]
    pub async fn previous_page(&mut self) {
        self.pagination.go_to_previous();
        self.refresh().await;
    }

    /// Widget-reported page change: 0-based page index plus the (possibly
    /// changed) page size.
    #[tracing::instrument(name = "browser.widget_page_change", skip(self))]
    pub async fn widget_page_change(&mut self, zero_based_index: u32, new_page_size: u32) {
        self.pagination
            .on_widget_page_change(zero_based_index, new_page_size);
        self.refresh().await;
    }

    // =========================================================================
    // Selection events
    // =========================================================================

    /// Row-toggle event: the widget reports the full set of selected rows on
    /// the visible page, and the ledger reconciles against it.
    pub fn reconcile_selection(&mut self, selected_on_page: &[ArtworkRecord]) {
        self.ledger.reconcile(&self.items, selected_on_page);
    }

    /// Bulk-select-submit event. The count comes from user input, so it may
    /// be non-positive; anything `<= 0` is a no-op.
    pub fn bulk_select(&mut self, n: i64) {
        if n <= 0 {
            debug!(n, "ignoring non-positive bulk select");
            return;
        }
        self.ledger.select_first_n(&self.items, n as usize);
        info!(
            n,
            selected = self.ledger.selected_count(),
            "bulk select applied"
        );
    }

    // =========================================================================
    // Fetch lifecycle
    // =========================================================================

    /// Enter the loading state and snapshot the pagination pair this fetch
    /// is for. Every call supersedes all fetches begun earlier.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        FetchRequest {
            generation: self.generation,
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
        }
    }

    /// Apply a fetch outcome, unless it is stale.
    ///
    /// A completion is stale when another `begin_fetch` happened after the
    /// one it belongs to; stale completions are dropped silently, no error
    /// surfaced. On failure the previous items are kept or cleared per the
    /// configured `FailurePolicy`.
    pub fn complete_fetch(&mut self, generation: u64, outcome: Result<ArtworkPage, FetchError>) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "dropping stale fetch completion"
            );
            return;
        }

        self.loading = false;
        match outcome {
            Ok(page) => {
                info!(
                    records = page.len(),
                    total = page.total_count,
                    "page applied"
                );
                self.pagination.set_total_count(page.total_count);
                self.items = page.items;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "fetch failed");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                if self.config.failure_policy == FailurePolicy::Clear {
                    self.items.clear();
                }
            }
        }
    }

    /// Fetch the current page and apply the result: `begin_fetch`, one port
    /// call, `complete_fetch`.
    pub async fn refresh(&mut self) {
        let request = self.begin_fetch();
        let outcome = self
            .catalog
            .fetch_page(request.page, request.page_size)
            .await;
        self.complete_fetch(request.generation, outcome);
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Build the frame handed to the display layer.
    pub fn view(&self) -> TableView {
        TableView {
            items: self.items.clone(),
            loading: self.loading,
            error: self.error.clone(),
            page: self.pagination.page(),
            first_row_offset: self.pagination.first_row_offset(),
            page_size: self.pagination.page_size(),
            total_count: self.pagination.total_count(),
            page_size_options: self.config.page_size_options.clone(),
            visible_selection: self.ledger.visible_selection(&self.items),
            error_display: self.config.error_display,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_core::{ArtworkId, ErrorDisplay};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Catalog {}

        #[async_trait]
        impl CatalogPort for Catalog {
            async fn fetch_page(
                &self,
                page: u32,
                page_size: u32,
            ) -> Result<ArtworkPage, FetchError>;
        }
    }

    fn record(id: i64) -> ArtworkRecord {
        ArtworkRecord {
            id: ArtworkId::new(id),
            title: Some(format!("Artwork {}", id)),
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    fn page_of(ids: &[i64], total: u64) -> ArtworkPage {
        ArtworkPage::new(ids.iter().copied().map(record).collect(), total)
    }

    fn browser_with(catalog: MockCatalog, config: BrowseConfig) -> CatalogBrowser {
        CatalogBrowser::new(Arc::new(catalog), config)
    }

    // =========================================================================
    // Fetch Orchestration Tests
    // =========================================================================

    #[tokio::test]
    async fn start_loads_page_one_with_configured_size() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .with(eq(1), eq(5))
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2, 3, 4, 5], 12)));

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;

        let view = browser.view();
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.total_count, 12);
        assert_eq!(view.page, 1);
        assert_eq!(view.first_row_offset, 0);
        assert!(!view.loading);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn every_navigation_triggers_exactly_one_fetch() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .with(eq(1), eq(5))
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2, 3, 4, 5], 12)));
        catalog
            .expect_fetch_page()
            .with(eq(2), eq(5))
            .times(1)
            .returning(|_, _| Ok(page_of(&[6, 7, 8, 9, 10], 12)));
        catalog
            .expect_fetch_page()
            .with(eq(4), eq(10))
            .times(1)
            .returning(|_, _| Ok(page_of(&[31], 31)));

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;
        browser.next_page().await;
        browser.widget_page_change(3, 10).await;

        let view = browser.view();
        assert_eq!(view.page, 4);
        assert_eq!(view.page_size, 10);
        assert_eq!(view.first_row_offset, 30);
    }

    #[tokio::test]
    async fn previous_from_page_one_refetches_page_one() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .with(eq(1), eq(5))
            .times(1)
            .returning(|_, _| Ok(page_of(&[1, 2], 2)));

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.previous_page().await;
        assert_eq!(browser.view().page, 1);
    }

    #[tokio::test]
    async fn out_of_range_page_shows_empty_table() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|page, _| match page {
                1 => Ok(page_of(&[1, 2, 3], 3)),
                _ => Ok(page_of(&[], 3)),
            });

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;
        browser.next_page().await;

        let view = browser.view();
        assert!(view.items.is_empty());
        assert!(view.error.is_none());
    }

    // =========================================================================
    // Failure Policy Tests
    // =========================================================================

    #[tokio::test]
    async fn failure_keeps_previous_items_by_default() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|page, _| match page {
                1 => Ok(page_of(&[1, 2, 3], 12)),
                _ => Err(FetchError::Status(500)),
            });

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;
        browser.next_page().await;

        let view = browser.view();
        // The table does not flash empty on a transient failure
        assert_eq!(view.items.len(), 3);
        assert_eq!(view.error.as_deref(), Some("Failed to load artworks data."));
        assert_eq!(view.error_display, ErrorDisplay::Inline);
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn failure_clears_items_under_clear_policy() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|page, _| match page {
                1 => Ok(page_of(&[1, 2, 3], 12)),
                _ => Err(FetchError::Transport("connection reset".to_string())),
            });

        let config = BrowseConfig {
            failure_policy: FailurePolicy::Clear,
            ..BrowseConfig::default()
        };
        let mut browser = browser_with(catalog, config);
        browser.start().await;
        browser.next_page().await;

        let view = browser.view();
        assert!(view.items.is_empty());
        assert!(view.error.is_some());
    }

    #[tokio::test]
    async fn success_after_failure_clears_the_error() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|page, _| match page {
                2 => Err(FetchError::Status(502)),
                _ => Ok(page_of(&[1, 2, 3], 3)),
            });

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;
        browser.next_page().await;
        assert!(browser.view().error.is_some());

        // The only recovery path is the next navigation
        browser.previous_page().await;
        assert!(browser.view().error.is_none());
    }

    // =========================================================================
    // Stale Completion Tests
    // =========================================================================

    #[tokio::test]
    async fn stale_completion_does_not_overwrite_newer_data() {
        let catalog = MockCatalog::new();
        let mut browser = browser_with(catalog, BrowseConfig::default());

        // Fetch for page 2 goes out, then the user navigates again before it
        // lands and the page 3 fetch completes first.
        let first = browser.begin_fetch();
        browser.pagination.go_to_next();
        let second = browser.begin_fetch();

        browser.complete_fetch(second.generation, Ok(page_of(&[11, 12, 13], 30)));
        browser.complete_fetch(first.generation, Ok(page_of(&[6, 7, 8], 30)));

        let ids: Vec<i64> = browser.view().items.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(ids, vec![11, 12, 13]);
        assert!(!browser.is_loading());
    }

    #[tokio::test]
    async fn stale_completion_arriving_first_keeps_loading() {
        let catalog = MockCatalog::new();
        let mut browser = browser_with(catalog, BrowseConfig::default());

        let first = browser.begin_fetch();
        let second = browser.begin_fetch();

        // The superseded fetch lands first: dropped, still waiting on the
        // current one.
        browser.complete_fetch(first.generation, Ok(page_of(&[1], 1)));
        assert!(browser.is_loading());
        assert!(browser.view().items.is_empty());

        browser.complete_fetch(second.generation, Ok(page_of(&[2], 1)));
        assert!(!browser.is_loading());
        assert_eq!(browser.view().items[0].id, ArtworkId::new(2));
    }

    #[tokio::test]
    async fn stale_failure_surfaces_no_error() {
        let catalog = MockCatalog::new();
        let mut browser = browser_with(catalog, BrowseConfig::default());

        let first = browser.begin_fetch();
        let second = browser.begin_fetch();

        browser.complete_fetch(second.generation, Ok(page_of(&[1], 1)));
        browser.complete_fetch(first.generation, Err(FetchError::Status(500)));

        assert!(browser.view().error.is_none());
    }

    // =========================================================================
    // Selection Tests
    // =========================================================================

    #[tokio::test]
    async fn selection_survives_navigating_away_and_back() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|page, _| match page {
                1 => Ok(page_of(&[1, 2, 3, 4, 5], 12)),
                2 => Ok(page_of(&[6, 7, 8, 9, 10], 12)),
                _ => Ok(page_of(&[11, 12], 12)),
            });

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;

        // Toggle rows 2 and 4 on page 1
        let selected = vec![record(2), record(4)];
        browser.reconcile_selection(&selected);

        browser.next_page().await;
        assert!(browser.view().visible_selection.is_empty());

        browser.previous_page().await;
        let ids: Vec<i64> = browser
            .view()
            .visible_selection
            .iter()
            .map(|r| r.id.as_i64())
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn bulk_select_marks_leading_rows_of_loaded_page() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|_, _| Ok(page_of(&[1, 2, 3, 4, 5], 5)));

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;
        browser.bulk_select(3);

        let ids: Vec<i64> = browser
            .view()
            .visible_selection
            .iter()
            .map(|r| r.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Shrinking the count never deselects
        browser.bulk_select(2);
        assert_eq!(browser.ledger().selected_count(), 3);
    }

    #[tokio::test]
    async fn bulk_select_ignores_non_positive_counts() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_fetch_page()
            .returning(|_, _| Ok(page_of(&[1, 2, 3], 3)));

        let mut browser = browser_with(catalog, BrowseConfig::default());
        browser.start().await;

        browser.bulk_select(0);
        browser.bulk_select(-7);
        assert!(browser.view().visible_selection.is_empty());
    }
}
