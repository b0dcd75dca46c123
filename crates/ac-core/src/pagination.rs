use serde::{Deserialize, Serialize};

/// Pagination state machine
///
/// Design principle: this is a pure state type with only the navigation
/// transitions and derived arithmetic. Triggering the actual page fetch on a
/// state change is handled by the application layer (ac-app).
///
/// The model is 1-based (`page >= 1`); table widgets report 0-based page
/// indices, and `on_widget_page_change` is the single place that translation
/// happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page, 1-based, always >= 1.
    page: u32,

    /// Records per page, always > 0.
    page_size: u32,

    /// Total records across all pages, as reported by the most recent
    /// successful fetch. 0 before the first fetch.
    total_count: u64,
}

impl PaginationState {
    /// Start on page 1 with the given page size.
    ///
    /// A zero `page_size` is lifted to 1 so the offset arithmetic never
    /// divides the record space into empty pages.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Advance one page.
    ///
    /// No upper bound is enforced against `total_count`; an out-of-range
    /// page yields a short or empty page from the catalog, which the display
    /// layer renders as an empty table.
    pub fn go_to_next(&mut self) {
        self.page += 1;
    }

    /// Go back one page, never below 1.
    pub fn go_to_previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Translate a widget-reported page-change event into the 1-based model.
    ///
    /// The widget is 0-based: event index 0 is page 1. The widget also
    /// reports the (possibly changed) page size with the same event.
    pub fn on_widget_page_change(&mut self, zero_based_index: u32, new_page_size: u32) {
        self.page = zero_based_index + 1;
        self.page_size = new_page_size.max(1);
    }

    /// 0-based offset of the first row of the current page within the total
    /// record space. This is what the widget needs to position its paginator.
    pub fn first_row_offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Number of pages implied by the last known total, rounding up.
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    /// Record the total reported by a successful fetch. Only the application
    /// layer calls this; navigation never touches the total.
    pub fn set_total_count(&mut self, total_count: u64) {
        self.total_count = total_count;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
