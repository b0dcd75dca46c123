//! Browse session configuration domain model

use serde::{Deserialize, Serialize};

/// Page size offered when no configuration is supplied.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// What to do with the rows already on screen when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep showing the previous page so the table does not flash empty on a
    /// transient failure.
    KeepPrevious,

    /// Clear the table and show only the error.
    Clear,
}

/// How the display layer should present a fetch error.
///
/// The core never renders either way; this is carried through the view so
/// the presentation layer can honor a single setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDisplay {
    /// Error banner above the (possibly stale) table.
    Inline,

    /// Replace the whole table with the error.
    FullPage,
}

/// Browse session configuration
///
/// Covers the knobs the prototypes disagreed on (failure handling, error
/// presentation) plus the paginator's allowed page sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Page sizes the paginator offers.
    pub page_size_options: Vec<u32>,

    /// Page size a fresh session starts with. Must be one of
    /// `page_size_options`.
    pub initial_page_size: u32,

    pub failure_policy: FailurePolicy,

    pub error_display: ErrorDisplay,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![5, 10, 25],
            initial_page_size: DEFAULT_PAGE_SIZE,
            failure_policy: FailurePolicy::KeepPrevious,
            error_display: ErrorDisplay::Inline,
        }
    }
}

impl BrowseConfig {
    /// Parse a configuration from a TOML document. The document must be
    /// complete; use `Default` when there is no file.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
