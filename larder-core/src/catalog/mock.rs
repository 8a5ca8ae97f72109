use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::config::API_KEY_ENV;
use super::{CatalogClient, RawRecord};
use crate::error::CatalogError;

/// How a [`MockCatalog`] should fail every call.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Behave like a client without an API key.
    NotConfigured,
    /// Answer with a non-success HTTP status.
    Status(u16),
    /// Answer with a body that cannot be parsed.
    Malformed,
}

/// In-process catalog for testing.
#[derive(Debug, Default)]
pub struct MockCatalog {
    search_results: Vec<RawRecord>,
    recipes: HashMap<i64, RawRecord>,
    failure: Option<MockFailure>,
    calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned by every search, regardless of the query.
    pub fn with_search_results(mut self, results: Vec<RawRecord>) -> Self {
        self.search_results = results;
        self
    }

    /// Record returned by `recipe_information(id)`. Unknown ids get a 404.
    pub fn with_recipe(mut self, id: i64, record: RawRecord) -> Self {
        self.recipes.insert(id, record);
        self
    }

    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            None => Ok(()),
            Some(MockFailure::NotConfigured) => Err(CatalogError::NotConfigured(API_KEY_ENV)),
            Some(MockFailure::Status(status)) => Err(CatalogError::ApiError {
                status: *status,
                details: None,
            }),
            Some(MockFailure::Malformed) => Err(CatalogError::ParseError(
                "mock malformed response".to_string(),
            )),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn search(&self, _query: &str) -> Result<Vec<RawRecord>, CatalogError> {
        self.check_failure()?;
        Ok(self.search_results.clone())
    }

    async fn recipe_information(&self, id: i64) -> Result<RawRecord, CatalogError> {
        self.check_failure()?;
        self.recipes
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ApiError {
                status: 404,
                details: None,
            })
    }
}
