use axum::{http::StatusCode, response::IntoResponse, Json};
use larder_core::{cuisine_options, diet_options, FilterOption};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct FilterOptionsResponse {
    pub cuisines: Vec<FilterOption>,
    pub diets: Vec<FilterOption>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/filters",
    tag = "recipes",
    responses(
        (status = 200, description = "Cuisine and diet choices for the search form", body = FilterOptionsResponse)
    )
)]
pub async fn list_filter_options() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(FilterOptionsResponse {
            cuisines: cuisine_options(),
            diets: diet_options(),
        }),
    )
}
