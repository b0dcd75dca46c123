use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::artwork::ArtworkRecord;
use crate::ids::ArtworkId;

/// Session-scoped record of which artwork ids are selected, independent of
/// which page is currently loaded.
///
/// The table widget only knows about selection on the rows it is showing;
/// this ledger lifts that visible-rows model into one that spans page turns.
/// Entries are keyed purely by id and never pruned: if the remote catalog
/// shifts and an id stops appearing on any page, its entry is inert but
/// harmless for the lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLedger {
    selected: HashSet<ArtworkId>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the widget's visible-rows selection back into the ledger.
    ///
    /// For every record on the current page: present in `selected_on_page`
    /// means selected, absent means unselected. Records on other pages are
    /// untouched, which is the whole point of keeping the ledger outside the
    /// widget.
    pub fn reconcile(
        &mut self,
        current_page_items: &[ArtworkRecord],
        selected_on_page: &[ArtworkRecord],
    ) {
        let selected_ids: HashSet<ArtworkId> = selected_on_page.iter().map(|r| r.id).collect();
        for record in current_page_items {
            if selected_ids.contains(&record.id) {
                self.selected.insert(record.id);
            } else {
                self.selected.remove(&record.id);
            }
        }
    }

    /// Mark the first `n` records of the current page as selected, in page
    /// order. Never deselects anything; `n` larger than the page selects the
    /// whole page; `n == 0` is a no-op.
    pub fn select_first_n(&mut self, current_page_items: &[ArtworkRecord], n: usize) {
        for record in current_page_items.iter().take(n) {
            self.selected.insert(record.id);
        }
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// The subset of the current page that is selected, in page order.
    ///
    /// Always recomputed from the ledger; the display layer must not cache
    /// it, or it diverges from the ledger on the next reconcile.
    pub fn visible_selection(&self, current_page_items: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        current_page_items
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
