//! # ac-core
//!
//! Core domain models and business logic for the artwork catalog browser.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod artwork;
pub mod config;
pub mod ids;
pub mod page;
pub mod pagination;
pub mod ports;
pub mod selection;

// Re-export commonly used types at the crate root
pub use artwork::ArtworkRecord;
pub use config::{BrowseConfig, ErrorDisplay, FailurePolicy};
pub use ids::ArtworkId;
pub use page::ArtworkPage;
pub use pagination::PaginationState;
pub use ports::{CatalogPort, FetchError};
pub use selection::SelectionLedger;
