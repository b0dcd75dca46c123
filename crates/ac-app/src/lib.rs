//! # ac-app
//!
//! Application layer: the browse session use case that wires pagination,
//! the selection ledger, and the catalog port together, and the `TableView`
//! projection handed to the display layer.

pub mod browser;
pub mod view;

pub use browser::{CatalogBrowser, FetchRequest};
pub use view::TableView;
