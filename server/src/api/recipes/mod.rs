pub mod filters;
pub mod search;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search_recipes))
        .route("/filters", get(filters::list_filter_options))
}

#[derive(OpenApi)]
#[openapi(
    paths(search::search_recipes, filters::list_filter_options),
    components(schemas(
        larder_core::SearchResults,
        larder_core::FilterOption,
        filters::FilterOptionsResponse,
    ))
)]
pub struct ApiDoc;
