use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{SearchFilters, SearchResults};

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchFilters),
    responses(
        (status = 200, description = "Matching recipes; degraded is true when the catalog could not be reached", body = SearchResults),
        (status = 400, description = "No search term or filter given", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> impl IntoResponse {
    if !filters.has_criteria() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Please enter a search term or select filters",
            )),
        )
            .into_response();
    }

    let results = larder_core::search_recipes(state.catalog.as_ref(), &filters).await;

    tracing::info!(
        count = results.recipes.len(),
        degraded = results.degraded,
        "Recipe search finished"
    );

    (StatusCode::OK, Json(results)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{body_json, test_state, test_state_with};
    use larder_core::{MemoryBookmarkStore, MockCatalog, MockFailure};
    use serde_json::json;
    use std::sync::Arc;

    fn catalog() -> MockCatalog {
        MockCatalog::new().with_search_results(vec![
            json!({
                "id": 1,
                "title": "Spaghetti Carbonara",
                "diets": ["Italian"],
                "extendedIngredients": [{"original": "200g pancetta"}]
            }),
            json!({
                "id": 2,
                "title": "Vegan Curry",
                "diets": ["vegan"],
                "extendedIngredients": [{"name": "chickpeas"}]
            }),
        ])
    }

    #[tokio::test]
    async fn test_search_without_criteria_is_rejected() {
        let catalog = catalog();
        let state = test_state(catalog);

        let response = search_recipes(State(state.clone()), Query(SearchFilters::default()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Please enter a search term or select filters");
    }

    #[tokio::test]
    async fn test_whitespace_query_counts_as_criterion() {
        let catalog = Arc::new(catalog());
        let state = test_state_with(catalog.clone(), Arc::new(MemoryBookmarkStore::new()));
        let filters = SearchFilters::with_query("  ");

        let response = search_recipes(State(state), Query(filters))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(catalog.calls(), 1);
        // No title contains a double space
        assert_eq!(body_json(response).await["recipes"], json!([]));
    }

    #[tokio::test]
    async fn test_search_filters_results() {
        let filters = SearchFilters {
            diet: "Vegan".to_string(),
            ..Default::default()
        };

        let response = search_recipes(State(test_state(catalog())), Query(filters))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["degraded"], false);
        let recipes = body["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["title"], "Vegan Curry");
        assert_eq!(recipes[0]["ingredients"], json!(["chickpeas"]));
    }

    #[tokio::test]
    async fn test_search_upstream_failure_is_degraded_not_error() {
        let state = test_state(MockCatalog::new().failing(MockFailure::Status(502)));

        let response = search_recipes(State(state), Query(SearchFilters::with_query("pasta")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["degraded"], true);
        assert_eq!(body["recipes"], json!([]));
    }
}
