//! Upstream recipe catalog access.
//!
//! All catalog traffic goes through [`CatalogClient`] so the search pipeline
//! and the save-by-id endpoint can be exercised against [`MockCatalog`] in
//! tests.

mod client;
mod config;
mod mock;

pub use client::{SpoonacularClient, SpoonacularClientBuilder};
pub use config::{CatalogConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use mock::{MockCatalog, MockFailure};

use async_trait::async_trait;

use crate::error::CatalogError;

/// Number of results requested per search. There is no pagination.
pub const PAGE_SIZE: u32 = 20;

/// An unprocessed recipe record as returned by the catalog.
pub type RawRecord = serde_json::Value;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search the catalog. An empty query means no text constraint.
    async fn search(&self, query: &str) -> Result<Vec<RawRecord>, CatalogError>;

    /// Fetch full information for a single recipe.
    async fn recipe_information(&self, id: i64) -> Result<RawRecord, CatalogError>;
}
