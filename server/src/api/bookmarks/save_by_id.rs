use crate::api::ErrorResponse;
use crate::state::AppState;
use crate::user::CurrentUser;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_core::{normalize_recipe, Bookmark, CatalogError};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveByIdRequest {
    /// Catalog recipe id, must be positive
    pub recipe_id: i64,
}

/// Pull a positive integer `recipeId` out of the body. Strings, floats and
/// non-positive numbers are rejected.
fn recipe_id(body: &Value) -> Option<i64> {
    body.get("recipeId")
        .and_then(Value::as_i64)
        .filter(|id| *id > 0)
}

fn error_response(status: StatusCode, error: &str, details: Option<Value>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/bookmarks/by-id",
    tag = "bookmarks",
    request_body = SaveByIdRequest,
    params(
        ("X-User-Id" = Option<String>, Header, description = "User saving the recipe")
    ),
    responses(
        (status = 201, description = "Recipe fetched from the catalog and saved", body = Bookmark),
        (status = 200, description = "Recipe was already saved", body = Bookmark),
        (status = 400, description = "Invalid or missing recipeId", body = ErrorResponse),
        (status = 500, description = "Catalog or bookmark store failure", body = ErrorResponse)
    )
)]
pub async fn save_bookmark_by_id(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let Some(catalog_id) = recipe_id(&body) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid or missing recipeId", None);
    };

    match state.bookmarks.find_existing(catalog_id, &user_id) {
        Ok(Some(existing)) => return (StatusCode::OK, Json(existing)).into_response(),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to look up bookmark: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save recipe",
                None,
            );
        }
    }

    let record = match state.catalog.recipe_information(catalog_id).await {
        Ok(record) => record,
        Err(CatalogError::NotConfigured(var)) => {
            tracing::error!("Catalog API key not configured, set {}", var);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Catalog API key not configured",
                None,
            );
        }
        Err(e) => {
            tracing::warn!(catalog_id, "Failed to fetch recipe from catalog: {}", e);
            let details = match e {
                CatalogError::ApiError { details, .. } => details,
                other => Some(Value::String(other.to_string())),
            };
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch recipe from catalog",
                details,
            );
        }
    };

    let mut recipe = normalize_recipe(&record);
    recipe.id = catalog_id;

    match state.bookmarks.create(&recipe, &user_id) {
        Ok(outcome) => {
            // A concurrent save may have won between the lookup and the insert
            let status = if outcome.was_created() {
                tracing::info!(catalog_id, "Bookmark created from catalog");
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(outcome.into_bookmark())).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to save bookmark: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save recipe", None)
        }
    }
}
