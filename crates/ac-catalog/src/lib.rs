//! # ac-catalog
//!
//! Infrastructure adapter for the remote artwork catalog: a reqwest-backed
//! implementation of `ac_core::CatalogPort` against the
//! `GET /artworks?page={page}&limit={page_size}` endpoint.

mod client;
mod dto;

pub use client::{CatalogConfig, HttpCatalogClient};
