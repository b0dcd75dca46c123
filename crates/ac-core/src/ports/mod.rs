//! Port interfaces for the application layer
//!
//! Ports define the contract between the browse logic and infrastructure
//! implementations, so the core stays independent of the HTTP transport.

mod catalog;

pub use catalog::{CatalogPort, FetchError};
