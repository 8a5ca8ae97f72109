//! The search pipeline: catalog fetch, normalization, filtering.

use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::filter::apply_filters;
use crate::normalize::normalize_search_results;
use crate::types::{Recipe, SearchFilters};

/// Outcome of a search.
///
/// `degraded` distinguishes "the catalog could not be reached" from "the
/// catalog answered and nothing matched"; both carry an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResults {
    pub recipes: Vec<Recipe>,
    /// True when the upstream catalog call failed
    pub degraded: bool,
}

impl SearchResults {
    fn degraded() -> Self {
        Self {
            recipes: Vec::new(),
            degraded: true,
        }
    }
}

/// Run a search. Never fails: catalog errors are logged and turned into an
/// empty, degraded result.
pub async fn search_recipes(catalog: &dyn CatalogClient, filters: &SearchFilters) -> SearchResults {
    let records = match catalog.search(&filters.query).await {
        Ok(records) => records,
        Err(e) => {
            log_catalog_failure(&e);
            return SearchResults::degraded();
        }
    };

    let fetched = records.len();
    let recipes = apply_filters(normalize_search_results(&records), filters);

    tracing::debug!(
        fetched,
        matched = recipes.len(),
        "search completed"
    );

    SearchResults {
        recipes,
        degraded: false,
    }
}

fn log_catalog_failure(error: &CatalogError) {
    match error {
        CatalogError::NotConfigured(var) => {
            tracing::error!(
                "Recipe search unavailable: catalog API key is not configured (set {})",
                var
            );
        }
        CatalogError::ApiError { status, details } => {
            tracing::warn!(status, details = ?details, "Recipe search failed: catalog returned an error");
        }
        other => {
            tracing::warn!(error = %other, "Recipe search failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockCatalog, MockFailure};
    use serde_json::json;

    fn catalog() -> MockCatalog {
        MockCatalog::new().with_search_results(vec![
            json!({
                "id": 1,
                "title": "Spaghetti Carbonara",
                "diets": ["Italian"],
                "extendedIngredients": [
                    {"original": "200g spaghetti"},
                    {"original": "100g pancetta"}
                ]
            }),
            json!({
                "id": 2,
                "title": "Pasta Primavera",
                "diets": ["vegetarian"],
                "extendedIngredients": [{"original": "1 lb penne"}]
            }),
            json!({"id": 3, "title": "Pasta e Fagioli"}),
        ])
    }

    #[tokio::test]
    async fn test_search_normalizes_and_filters() {
        let catalog = catalog();
        let filters = SearchFilters {
            query: "pasta".to_string(),
            diet: "Vegetarian".to_string(),
            ..SearchFilters::default()
        };

        let results = search_recipes(&catalog, &filters).await;
        assert!(!results.degraded);
        assert_eq!(results.recipes.len(), 1);
        assert_eq!(results.recipes[0].id, 2);
        assert_eq!(results.recipes[0].ingredients, vec!["1 lb penne"]);
    }

    #[tokio::test]
    async fn test_no_match_is_not_degraded() {
        let catalog = catalog();
        let results = search_recipes(&catalog, &SearchFilters::with_query("sushi")).await;
        assert!(results.recipes.is_empty());
        assert!(!results.degraded);
    }

    #[tokio::test]
    async fn test_upstream_error_degrades_to_empty() {
        let catalog = catalog().failing(MockFailure::Status(500));
        let results = search_recipes(&catalog, &SearchFilters::with_query("pasta")).await;
        assert!(results.recipes.is_empty());
        assert!(results.degraded);
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_degrades_to_empty() {
        let catalog = catalog().failing(MockFailure::NotConfigured);
        let results = search_recipes(&catalog, &SearchFilters::default()).await;
        assert!(results.degraded);
    }

    #[tokio::test]
    async fn test_malformed_response_degrades_to_empty() {
        let catalog = catalog().failing(MockFailure::Malformed);
        let results = search_recipes(&catalog, &SearchFilters::default()).await;
        assert!(results.degraded);
    }
}
