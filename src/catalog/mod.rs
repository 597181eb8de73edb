//! Remote Catalog Client - typed access to the bookshelf REST API
//!
//! This module provides:
//! - Request/response models matching the catalog wire format
//! - CatalogClient trait for API abstraction
//! - HttpCatalogClient implementation over reqwest
//! - MockCatalogClient in-memory double for tests

pub mod client;
pub mod http;
pub mod types;

pub use client::{CatalogClient, CatalogError, MockCatalogClient};
pub use http::{HttpCatalogClient, HttpCatalogConfig};
pub use types::{BookDetail, BookPayload, BookSummary, Envelope};
